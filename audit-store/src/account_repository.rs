use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::ServiceAccount;

/// Repository for service account credentials
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: Pool<Postgres>,
}

impl AccountRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Check a name/access-code pair, case-insensitive on the name.
    /// On a match the login timestamp is touched and the account returned;
    /// otherwise `None`. One statement, so the touch and the check cannot
    /// diverge under concurrent logins.
    pub async fn authenticate(
        &self,
        name: &str,
        access_code: &str,
    ) -> StoreResult<Option<ServiceAccount>> {
        let account = sqlx::query_as::<_, ServiceAccount>(
            r#"
            UPDATE service_accounts
            SET last_login_at = $3
            WHERE lower(name) = lower($1) AND access_code = $2
            RETURNING account_id, name, role, created_at, last_login_at
            "#,
        )
        .bind(name)
        .bind(access_code)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Register a service account. Used by provisioning and test setup.
    pub async fn create(
        &self,
        name: &str,
        access_code: &str,
        role: &str,
    ) -> StoreResult<ServiceAccount> {
        let account = sqlx::query_as::<_, ServiceAccount>(
            r#"
            INSERT INTO service_accounts (account_id, name, access_code, role, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING account_id, name, role, created_at, last_login_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(access_code)
        .bind(role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }
}
