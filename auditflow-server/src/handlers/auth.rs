//! Service account authentication handlers

use axum::{extract::State, response::Json};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use audit_store::ServiceAccount;

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    validation::RequestValidation,
    validate_required,
};

/// Login request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Service account name (matched case-insensitively)
    pub name: String,
    /// Access code for the account
    pub access_code: String,
}

impl RequestValidation for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.name, "Name is required");
        validate_required!(self.access_code, "Access code is required");
        Ok(())
    }
}

/// Authenticate a service account
///
/// On success the account's last login timestamp is refreshed and the
/// account record (without its access code) is returned. Invalid
/// credentials produce a 401 with a generic message; the response never
/// reveals whether the name or the code was wrong.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authentication succeeded", body = ServiceAccount),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(server): State<AuditServer>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<ServiceAccount>>, ApiError> {
    request.validate()?;

    let account = server
        .account_repo
        .authenticate(&request.name, &request.access_code)
        .await?;

    match account {
        Some(account) => {
            info!(
                account_id = %account.account_id,
                name = %account.name,
                role = %account.role,
                "Service account logged in"
            );
            Ok(Json(api_success(account)))
        }
        None => Err(ApiError::authentication("Invalid name or access code")),
    }
}
