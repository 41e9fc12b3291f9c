// Database models
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use audit_core::{NcStatus, Severity};

/// A person being audited. Upserted on case-insensitive email, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Auditee {
    pub auditee_id: Uuid,
    pub name: String,
    pub email: String,
    pub function: Option<String>,
    pub plant: Option<String>,
    pub department: Option<String>,
    pub manager_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One audit session. Status only moves forward, `in_progress` to `completed`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Audit {
    pub audit_id: Uuid,
    pub auditee_id: Uuid,
    pub audit_type: String,
    pub questionnaire_version: Option<String>,
    /// Caller-supplied idempotency key, stored verbatim and never used for
    /// deduplication on this side.
    pub external_id: Option<String>,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub score_global: Option<f64>,
}

/// The slice of an audit returned by completion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompletedAudit {
    pub audit_id: Uuid,
    pub status: String,
    pub ended_at: DateTime<Utc>,
    pub score_global: f64,
}

/// One answer joined with its question and the audited person, as served
/// by the audit review listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AnswerDetail {
    pub answer_id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    pub category: Option<String>,
    pub mandatory: bool,
    pub version_tag: String,
    pub response_text: Option<String>,
    pub is_compliant: Option<bool>,
    pub attempt_number: i16,
    pub evidence_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub audit_type: String,
    pub auditee_name: String,
    pub auditee_email: String,
}

/// A named API client holding an access code. The access code itself is
/// never selected back out of the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceAccount {
    pub account_id: Uuid,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// A remediation action plan; its steps are written in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActionPlan {
    pub action_plan_id: Uuid,
    pub title: String,
    pub owner: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// One question definition submitted for resolution against a version tag.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub category: Option<String>,
    pub mandatory: bool,
    pub source_doc: Option<String>,
}

/// Resolution result for one submitted definition; `index` preserves the
/// input position so callers can map answers back.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResolvedQuestion {
    pub index: usize,
    pub question_id: Uuid,
}

/// A finding to register against a question within an audit.
#[derive(Debug, Clone)]
pub struct NewNonConformity {
    pub audit_id: Uuid,
    pub question_id: Uuid,
    pub description: String,
    pub severity: Severity,
    pub status: NcStatus,
    pub responsible_id: Option<Uuid>,
    pub due_date: Option<NaiveDate>,
    pub evidence_url: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closure_comment: Option<String>,
}

/// One step of an action plan, in submission order.
#[derive(Debug, Clone)]
pub struct NewActionStep {
    pub description: String,
    pub due_date: Option<NaiveDate>,
}
