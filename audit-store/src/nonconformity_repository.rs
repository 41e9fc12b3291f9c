use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::NewNonConformity;

/// Repository for non-conformity findings
#[derive(Debug, Clone)]
pub struct NonConformityRepository {
    pool: Pool<Postgres>,
}

impl NonConformityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a new finding. Every call creates a new row; there is no
    /// merge against prior findings for the same question. The detection
    /// timestamp is always assigned here, closure metadata is stored as
    /// supplied without any workflow enforcement.
    pub async fn insert(&self, finding: NewNonConformity) -> StoreResult<Uuid> {
        let (nc_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO non_conformities (
                nc_id, audit_id, question_id, description, severity, status,
                responsible_id, due_date, evidence_url, closed_at,
                closure_comment, detected_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING nc_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(finding.audit_id)
        .bind(finding.question_id)
        .bind(&finding.description)
        .bind(finding.severity.as_str())
        .bind(finding.status.as_str())
        .bind(finding.responsible_id)
        .bind(finding.due_date)
        .bind(&finding.evidence_url)
        .bind(finding.closed_at)
        .bind(&finding.closure_comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(nc_id)
    }
}
