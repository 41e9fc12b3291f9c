use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::AnswerDetail;

/// Repository for answer recording and review
#[derive(Debug, Clone)]
pub struct AnswerRepository {
    pool: Pool<Postgres>,
}

impl AnswerRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Store or overwrite the answer for one (audit, question, attempt)
    /// triple and return its identifier.
    ///
    /// A single conditional upsert keeps concurrent identical calls from
    /// duplicating rows: the insert either lands or replaces the response
    /// fields of the existing row, whose identifier and creation timestamp
    /// are preserved. Attempts are intentionally unordered; attempt 2 may
    /// be recorded before attempt 1.
    pub async fn upsert(
        &self,
        audit_id: Uuid,
        question_id: Uuid,
        response_text: Option<&str>,
        is_compliant: Option<bool>,
        attempt_number: i16,
        evidence_url: Option<&str>,
    ) -> StoreResult<Uuid> {
        let (answer_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO answers (
                answer_id, audit_id, question_id, response_text,
                is_compliant, attempt_number, evidence_url, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (audit_id, question_id, attempt_number) DO UPDATE SET
                response_text = EXCLUDED.response_text,
                is_compliant = EXCLUDED.is_compliant,
                evidence_url = EXCLUDED.evidence_url
            RETURNING answer_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(audit_id)
        .bind(question_id)
        .bind(response_text)
        .bind(is_compliant)
        .bind(attempt_number)
        .bind(evidence_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(answer_id)
    }

    /// List every answer of an audit joined with its question and the
    /// audited person, ordered by question then attempt. Review data, not
    /// used by the scoring path.
    pub async fn list_for_audit(&self, audit_id: Uuid) -> StoreResult<Vec<AnswerDetail>> {
        let answers = sqlx::query_as::<_, AnswerDetail>(
            r#"
            SELECT a.answer_id, a.question_id, q.text AS question_text,
                   q.category, q.mandatory, q.version_tag,
                   a.response_text, a.is_compliant, a.attempt_number,
                   a.evidence_url, a.created_at,
                   au.audit_type, ae.name AS auditee_name, ae.email AS auditee_email
            FROM answers a
            JOIN questions q ON q.question_id = a.question_id
            JOIN audits au ON au.audit_id = a.audit_id
            JOIN auditees ae ON ae.auditee_id = au.auditee_id
            WHERE a.audit_id = $1
            ORDER BY a.question_id ASC, a.attempt_number ASC
            "#,
        )
        .bind(audit_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }
}
