//! Answer recording and listing handlers

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use audit_core::{MAX_ATTEMPT, MIN_ATTEMPT};
use audit_store::AnswerDetail;

use crate::{
    error::{api_success, api_success_with_meta, ApiError, ApiResponse, ResponseMetadata},
    server::AuditServer,
    validation::RequestValidation,
    validate_length, validate_range, validate_uuid,
};

/// Save answer request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveAnswerRequest {
    /// Question being answered
    pub question_id: Uuid,
    /// Free-text response
    #[serde(default)]
    pub response_text: Option<String>,
    /// Compliance assessment; absent means not assessed
    #[serde(default)]
    pub is_compliant: Option<bool>,
    /// Attempt number, 1 or 2
    pub attempt_number: i16,
    /// Link to supporting evidence
    #[serde(default)]
    pub evidence_url: Option<String>,
}

impl RequestValidation for SaveAnswerRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_uuid!(self.question_id, "Question ID is required");
        validate_range!(
            self.attempt_number,
            MIN_ATTEMPT,
            MAX_ATTEMPT,
            "Attempt number must be 1 or 2"
        );
        if let Some(evidence_url) = &self.evidence_url {
            validate_length!(evidence_url, 1, 2048, "Evidence URL must be 1-2048 characters");
        }
        Ok(())
    }
}

/// Save answer response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct SaveAnswerResponse {
    pub answer_id: Uuid,
}

/// Answer listing response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct AnswerListResponse {
    pub audit_id: Uuid,
    pub count: usize,
    pub answers: Vec<AnswerDetail>,
}

/// Record an answer for an audit
///
/// Answers are keyed by (audit, question, attempt): resubmitting the
/// same key overwrites the stored response in place. The two attempts
/// are independent slots and may arrive in either order.
#[utoipa::path(
    post,
    path = "/audits/{id}/answers",
    request_body = SaveAnswerRequest,
    params(
        ("id" = Uuid, Path, description = "Audit identifier")
    ),
    responses(
        (status = 200, description = "Answer recorded", body = SaveAnswerResponse),
        (status = 400, description = "Invalid answer data"),
        (status = 404, description = "Audit not found")
    ),
    tag = "audits"
)]
pub async fn save_answer(
    State(server): State<AuditServer>,
    Path(audit_id): Path<Uuid>,
    Json(request): Json<SaveAnswerRequest>,
) -> Result<Json<ApiResponse<SaveAnswerResponse>>, ApiError> {
    request.validate()?;

    if !server.audit_repo.exists(audit_id).await? {
        return Err(ApiError::not_found("Audit"));
    }

    let answer_id = server
        .answer_repo
        .upsert(
            audit_id,
            request.question_id,
            request.response_text.as_deref(),
            request.is_compliant,
            request.attempt_number,
            request.evidence_url.as_deref(),
        )
        .await?;

    info!(
        audit_id = %audit_id,
        question_id = %request.question_id,
        attempt = request.attempt_number,
        "Answer recorded"
    );

    Ok(Json(api_success(SaveAnswerResponse { answer_id })))
}

/// List all answers recorded for an audit
///
/// Each entry joins in the question text and the auditee context so
/// that clients can render the transcript without extra lookups.
#[utoipa::path(
    get,
    path = "/audits/{id}/answers",
    params(
        ("id" = Uuid, Path, description = "Audit identifier")
    ),
    responses(
        (status = 200, description = "Answers for the audit", body = AnswerListResponse),
        (status = 404, description = "Audit not found")
    ),
    tag = "audits"
)]
pub async fn list_answers(
    State(server): State<AuditServer>,
    Path(audit_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AnswerListResponse>>, ApiError> {
    if !server.audit_repo.exists(audit_id).await? {
        return Err(ApiError::not_found("Audit"));
    }

    let answers = server.answer_repo.list_for_audit(audit_id).await?;
    let count = answers.len();

    Ok(Json(api_success_with_meta(
        AnswerListResponse {
            audit_id,
            count,
            answers,
        },
        ResponseMetadata {
            total_count: Some(count as i64),
        },
    )))
}
