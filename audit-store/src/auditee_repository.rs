use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::Auditee;

/// Repository for auditee profile operations
#[derive(Debug, Clone)]
pub struct AuditeeRepository {
    pool: Pool<Postgres>,
}

impl AuditeeRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create or update an auditee, keyed on the case-insensitive email.
    /// A repeated email (in any casing) updates the profile in place and
    /// never creates a second row.
    pub async fn upsert(
        &self,
        name: &str,
        email: &str,
        function: Option<&str>,
        plant: Option<&str>,
        department: Option<&str>,
        manager_email: Option<&str>,
    ) -> StoreResult<Auditee> {
        let now = Utc::now();
        let auditee = sqlx::query_as::<_, Auditee>(
            r#"
            INSERT INTO auditees (
                auditee_id, name, email, function, plant, department,
                manager_email, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            ON CONFLICT ((lower(email))) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                function = EXCLUDED.function,
                plant = EXCLUDED.plant,
                department = EXCLUDED.department,
                manager_email = EXCLUDED.manager_email,
                updated_at = EXCLUDED.updated_at
            RETURNING auditee_id, name, email, function, plant, department,
                      manager_email, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(function)
        .bind(plant)
        .bind(department)
        .bind(manager_email)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(auditee)
    }

    /// Whether an auditee with this identifier exists.
    pub async fn exists(&self, auditee_id: Uuid) -> StoreResult<bool> {
        let row: Option<(Uuid,)> =
            sqlx::query_as("SELECT auditee_id FROM auditees WHERE auditee_id = $1")
                .bind(auditee_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.is_some())
    }
}
