//! Audit lifecycle handlers: start and complete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use audit_store::{Audit, CompletedAudit};

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    validation::RequestValidation,
    validate_length, validate_required, validate_uuid,
};

/// Start audit request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct StartAuditRequest {
    /// Auditee the session belongs to
    pub auditee_id: Uuid,
    /// Audit type label, e.g. "ISO9001"
    #[serde(alias = "type")]
    pub audit_type: String,
    /// Question bank version the session will draw from
    #[serde(default)]
    pub questionnaire_version: Option<String>,
    /// Caller-side correlation identifier, stored verbatim
    #[serde(default)]
    pub external_id: Option<String>,
}

impl RequestValidation for StartAuditRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_uuid!(self.auditee_id, "Auditee ID is required");
        validate_required!(self.audit_type, "Audit type is required");
        validate_length!(self.audit_type, 1, 100, "Audit type must be 1-100 characters");
        if let Some(questionnaire_version) = &self.questionnaire_version {
            validate_length!(
                questionnaire_version,
                1,
                50,
                "Questionnaire version must be 1-50 characters"
            );
        }
        if let Some(external_id) = &self.external_id {
            validate_length!(external_id, 1, 255, "External ID must be 1-255 characters");
        }
        Ok(())
    }
}

/// Complete audit request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteAuditRequest {
    /// Caller-supplied global score, stored verbatim when present.
    /// When absent the score is computed from the recorded answers.
    #[serde(default)]
    pub score_global: Option<f64>,
}

/// Start a new audit session
#[utoipa::path(
    post,
    path = "/audits/start",
    request_body = StartAuditRequest,
    responses(
        (status = 201, description = "Audit session started", body = Audit),
        (status = 400, description = "Invalid audit data or unknown auditee")
    ),
    tag = "audits"
)]
pub async fn start_audit(
    State(server): State<AuditServer>,
    Json(request): Json<StartAuditRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Audit>>), ApiError> {
    request.validate()?;

    if !server.auditee_repo.exists(request.auditee_id).await? {
        return Err(ApiError::validation("Referenced auditee does not exist"));
    }

    let audit = server
        .audit_repo
        .start(
            request.auditee_id,
            &request.audit_type,
            request.questionnaire_version.as_deref(),
            request.external_id.as_deref(),
        )
        .await?;

    info!(
        audit_id = %audit.audit_id,
        auditee_id = %audit.auditee_id,
        audit_type = %audit.audit_type,
        "Audit started"
    );

    Ok((StatusCode::CREATED, Json(api_success(audit))))
}

/// Complete an audit session and resolve its global score
#[utoipa::path(
    post,
    path = "/audits/{id}/complete",
    request_body = CompleteAuditRequest,
    params(
        ("id" = Uuid, Path, description = "Audit identifier")
    ),
    responses(
        (status = 200, description = "Audit completed", body = CompletedAudit),
        (status = 404, description = "Audit not found")
    ),
    tag = "audits"
)]
pub async fn complete_audit(
    State(server): State<AuditServer>,
    Path(audit_id): Path<Uuid>,
    Json(request): Json<CompleteAuditRequest>,
) -> Result<Json<ApiResponse<CompletedAudit>>, ApiError> {
    let outcome = server
        .audit_repo
        .complete(audit_id, request.score_global)
        .await?
        .ok_or_else(|| ApiError::not_found("Audit"))?;

    match &outcome.summary {
        Some(summary) => info!(
            audit_id = %audit_id,
            score = summary.score,
            answered = summary.answered_questions,
            compliant = summary.compliant_questions,
            "Audit completed with computed score"
        ),
        None => info!(
            audit_id = %audit_id,
            score = outcome.audit.score_global,
            "Audit completed with caller-supplied score"
        ),
    }

    Ok(Json(api_success(outcome.audit)))
}
