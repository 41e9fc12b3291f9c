//! Auditee profile handlers

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use audit_store::Auditee;

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    validation::RequestValidation,
    validate_email, validate_length, validate_required,
};

/// Create or update auditee request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpsertAuditeeRequest {
    /// Display name of the auditee
    pub name: String,
    /// Contact email, used as the upsert key (case-insensitive)
    pub email: String,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub plant: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub manager_email: Option<String>,
}

impl RequestValidation for UpsertAuditeeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.name, "Name is required");
        validate_length!(self.name, 1, 200, "Name must be 1-200 characters");
        validate_required!(self.email, "Email is required");
        validate_email!(self.email, "Invalid email format");
        if let Some(manager_email) = &self.manager_email {
            validate_email!(manager_email, "Invalid manager email format");
        }
        Ok(())
    }
}

/// Create or update an auditee profile
///
/// Profiles are keyed by lowercased email: submitting the same email
/// again (in any casing) updates the existing profile in place instead
/// of creating a duplicate.
#[utoipa::path(
    post,
    path = "/auditees",
    request_body = UpsertAuditeeRequest,
    responses(
        (status = 200, description = "Auditee profile created or updated", body = Auditee),
        (status = 400, description = "Invalid auditee data")
    ),
    tag = "auditees"
)]
pub async fn upsert_auditee(
    State(server): State<AuditServer>,
    Json(request): Json<UpsertAuditeeRequest>,
) -> Result<Json<ApiResponse<Auditee>>, ApiError> {
    request.validate()?;

    let auditee = server
        .auditee_repo
        .upsert(
            &request.name,
            &request.email,
            request.function.as_deref(),
            request.plant.as_deref(),
            request.department.as_deref(),
            request.manager_email.as_deref(),
        )
        .await?;

    info!(
        auditee_id = %auditee.auditee_id,
        email = %auditee.email,
        "Auditee profile upserted"
    );

    Ok(Json(api_success(auditee)))
}
