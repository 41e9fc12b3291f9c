//! Non-conformity register handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use audit_core::{NcStatus, Severity};
use audit_store::NewNonConformity;

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    utils::timestamps::{parse_date, parse_rfc3339},
    validation::RequestValidation,
    validate_field, validate_required, validate_uuid,
};

/// Register non-conformity request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveNonConformityRequest {
    /// Question the finding was raised against
    pub question_id: Uuid,
    /// Description of the finding
    pub description: String,
    /// Severity: minor, major or critical
    pub severity: String,
    /// Remediation status: open, in_progress or closed
    pub status: String,
    /// Person responsible for remediation
    #[serde(default)]
    pub responsible_id: Option<Uuid>,
    /// Remediation due date (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: Option<String>,
    /// Link to supporting evidence
    #[serde(default)]
    pub evidence_url: Option<String>,
    /// Closure timestamp (RFC3339), for findings registered as closed
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub closure_comment: Option<String>,
}

impl RequestValidation for SaveNonConformityRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_uuid!(self.question_id, "Question ID is required");
        validate_required!(self.description, "Description is required");
        validate_field!(
            self.severity,
            self.severity.parse::<Severity>().is_ok(),
            "Severity must be one of: minor, major, critical"
        );
        validate_field!(
            self.status,
            self.status.parse::<NcStatus>().is_ok(),
            "Status must be one of: open, in_progress, closed"
        );
        Ok(())
    }
}

/// Register non-conformity response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveNonConformityResponse {
    pub nc_id: Uuid,
}

/// Register a non-conformity finding against an audit
///
/// Every submission creates a new finding; repeated submissions are
/// deliberately kept as separate records. The detection timestamp is
/// assigned server-side.
#[utoipa::path(
    post,
    path = "/audits/{id}/nonconformities",
    request_body = SaveNonConformityRequest,
    params(
        ("id" = Uuid, Path, description = "Audit identifier")
    ),
    responses(
        (status = 201, description = "Non-conformity registered", body = SaveNonConformityResponse),
        (status = 400, description = "Invalid non-conformity data"),
        (status = 404, description = "Audit not found")
    ),
    tag = "audits"
)]
pub async fn save_nonconformity(
    State(server): State<AuditServer>,
    Path(audit_id): Path<Uuid>,
    Json(request): Json<SaveNonConformityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SaveNonConformityResponse>>), ApiError> {
    request.validate()?;

    let severity: Severity = request.severity.parse()?;
    let status: NcStatus = request.status.parse()?;
    let due_date = request
        .due_date
        .as_deref()
        .map(|value| parse_date("due_date", value))
        .transpose()?;
    let closed_at = request
        .closed_at
        .as_deref()
        .map(|value| parse_rfc3339("closed_at", value))
        .transpose()?;

    if !server.audit_repo.exists(audit_id).await? {
        return Err(ApiError::not_found("Audit"));
    }

    let nc_id = server
        .nonconformity_repo
        .insert(NewNonConformity {
            audit_id,
            question_id: request.question_id,
            description: request.description.clone(),
            severity,
            status,
            responsible_id: request.responsible_id,
            due_date,
            evidence_url: request.evidence_url.clone(),
            closed_at,
            closure_comment: request.closure_comment.clone(),
        })
        .await?;

    info!(
        audit_id = %audit_id,
        question_id = %request.question_id,
        nc_id = %nc_id,
        severity = %severity,
        "Non-conformity registered"
    );

    Ok((StatusCode::CREATED, Json(api_success(SaveNonConformityResponse { nc_id }))))
}
