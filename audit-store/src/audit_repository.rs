use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use audit_core::score::{self, AnswerOutcome, ScoreSummary};
use audit_core::AuditStatus;

use crate::error::StoreResult;
use crate::models::{Audit, CompletedAudit};

/// Result of completing an audit. `summary` is present only when the score
/// was computed from recorded answers rather than supplied by the caller.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub audit: CompletedAudit,
    pub summary: Option<ScoreSummary>,
}

/// Repository for audit session operations
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: Pool<Postgres>,
}

impl AuditRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a new audit session for an auditee, in progress as of now.
    pub async fn start(
        &self,
        auditee_id: Uuid,
        audit_type: &str,
        questionnaire_version: Option<&str>,
        external_id: Option<&str>,
    ) -> StoreResult<Audit> {
        let audit = sqlx::query_as::<_, Audit>(
            r#"
            INSERT INTO audits (
                audit_id, auditee_id, audit_type, questionnaire_version,
                external_id, status, started_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING audit_id, auditee_id, audit_type, questionnaire_version,
                      external_id, status, started_at, ended_at, score_global
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(auditee_id)
        .bind(audit_type)
        .bind(questionnaire_version)
        .bind(external_id)
        .bind(AuditStatus::InProgress.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(audit)
    }

    /// Whether an audit with this identifier exists.
    pub async fn exists(&self, audit_id: Uuid) -> StoreResult<bool> {
        let row: Option<(Uuid,)> = sqlx::query_as("SELECT audit_id FROM audits WHERE audit_id = $1")
            .bind(audit_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Mark an audit completed, resolving its global score.
    ///
    /// An explicit score is stored verbatim. Without one, every recorded
    /// answer of the audit is read back and aggregated with the
    /// OR-across-attempts rule; zero answers score 0.0. Returns `None`
    /// when the audit does not exist. Completing an already-completed
    /// audit overwrites its end timestamp and score.
    pub async fn complete(
        &self,
        audit_id: Uuid,
        explicit_score: Option<f64>,
    ) -> StoreResult<Option<CompletionOutcome>> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT audit_id FROM audits WHERE audit_id = $1")
                .bind(audit_id)
                .fetch_optional(&mut *tx)
                .await?;
        if existing.is_none() {
            return Ok(None);
        }

        let (score_global, summary) = match explicit_score {
            Some(score) => (score, None),
            None => {
                let rows: Vec<(Uuid, Option<bool>)> = sqlx::query_as(
                    "SELECT question_id, is_compliant FROM answers WHERE audit_id = $1",
                )
                .bind(audit_id)
                .fetch_all(&mut *tx)
                .await?;

                let outcomes: Vec<AnswerOutcome> = rows
                    .into_iter()
                    .map(|(question_id, is_compliant)| {
                        AnswerOutcome::new(question_id, is_compliant)
                    })
                    .collect();

                let summary = score::summarize(&outcomes);
                (summary.score, Some(summary))
            }
        };

        let audit = sqlx::query_as::<_, CompletedAudit>(
            r#"
            UPDATE audits
            SET status = $2, ended_at = $3, score_global = $4
            WHERE audit_id = $1
            RETURNING audit_id, status, ended_at, score_global
            "#,
        )
        .bind(audit_id)
        .bind(AuditStatus::Completed.as_str())
        .bind(Utc::now())
        .bind(score_global)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(CompletionOutcome { audit, summary }))
    }
}
