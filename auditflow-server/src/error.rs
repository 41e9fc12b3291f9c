//! Error handling for the AuditFlow server
//!
//! Provides consistent error types and HTTP response formatting
//! for all API endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use audit_store::StoreError;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Unique error identifier for tracking
    pub error_id: String,
    /// Error type/category
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
    /// Field-specific validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<HashMap<String, Vec<String>>>,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Standard API success response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Success indicator
    pub success: bool,
    /// Response data
    pub data: T,
    /// Optional metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

/// Response metadata for list results
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

/// Main API error type for the AuditFlow server
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field_errors: Option<HashMap<String, Vec<String>>>,
    },

    /// Authentication failed
    #[error("Authentication error: {message}")]
    Authentication { message: String },

    /// Resource not found
    #[error("Resource not found: {resource_type}")]
    NotFound { resource_type: String },

    /// Resource conflict
    #[error("Resource conflict: {message}")]
    Conflict { message: String },

    /// Storage layer error
    #[error("Database error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error
    #[error("Internal server error: {message}")]
    Internal { message: String },

    /// Bad request
    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

impl ApiError {
    /// Create a validation error with a single message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors: None,
        }
    }

    /// Create a validation error with field-specific errors
    pub fn validation_with_fields(
        message: impl Into<String>,
        field_errors: HashMap<String, Vec<String>>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors: Some(field_errors),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Authentication { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Store(store_error) => match store_error {
                StoreError::ConnectionFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
                StoreError::MigrationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
                StoreError::Sqlx(sqlx_error) => match sqlx_error {
                    sqlx::Error::RowNotFound => StatusCode::NOT_FOUND,
                    sqlx::Error::PoolTimedOut => StatusCode::SERVICE_UNAVAILABLE,
                    sqlx::Error::Database(db_error) => {
                        let message = db_error.message();
                        if message.contains("duplicate key") {
                            StatusCode::CONFLICT
                        } else if message.contains("foreign key")
                            || message.contains("check constraint")
                            || message.contains("null value")
                        {
                            StatusCode::BAD_REQUEST
                        } else {
                            StatusCode::INTERNAL_SERVER_ERROR
                        }
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                },
            },
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error type string for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::Authentication { .. } => "authentication_error",
            ApiError::NotFound { .. } => "not_found",
            ApiError::Conflict { .. } => "conflict",
            ApiError::Store(_) => "database_error",
            ApiError::Internal { .. } => "internal_error",
            ApiError::BadRequest { .. } => "bad_request",
        }
    }

    /// Get a sanitized, user-facing message for this error
    ///
    /// Storage errors are reduced to generic descriptions so that raw
    /// driver messages never leak to API clients.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Store(store_error) => format_store_error(store_error),
            other => other.to_string(),
        }
    }
}

/// Format storage errors into user-friendly messages
///
/// The raw database message is matched on well-known PostgreSQL
/// phrases and replaced with a stable description.
pub fn format_store_error(store_error: &StoreError) -> String {
    match store_error {
        StoreError::ConnectionFailed(_) => "Unable to connect to the database.".to_string(),
        StoreError::MigrationFailed(_) => "Database schema is not up to date.".to_string(),
        StoreError::Sqlx(sqlx_error) => match sqlx_error {
            sqlx::Error::RowNotFound => "Requested record not found.".to_string(),
            sqlx::Error::PoolTimedOut => {
                "Database is temporarily unavailable. Please try again.".to_string()
            }
            sqlx::Error::Database(db_error) => {
                let message = db_error.message();
                if message.contains("duplicate key") {
                    "A record with these details already exists.".to_string()
                } else if message.contains("foreign key") {
                    "Referenced record does not exist or has been deleted.".to_string()
                } else if message.contains("check constraint") {
                    "The provided data does not meet validation requirements.".to_string()
                } else if message.contains("null value") {
                    "Required field is missing or empty.".to_string()
                } else {
                    "Database operation failed. Please try again.".to_string()
                }
            }
            _ => "Database operation failed. Please try again.".to_string(),
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();
        let error_type = self.error_type();
        let message = self.client_message();

        let field_errors = match &self {
            ApiError::Validation { field_errors, .. } => field_errors.clone(),
            _ => None,
        };

        // Full error (including raw database messages) goes to the log,
        // never to the client.
        tracing::error!(
            error_id = %error_id,
            error_type = %error_type,
            status = %status_code,
            error = %self,
            "API error occurred"
        );

        let body = ApiErrorResponse {
            error_id,
            error_type: error_type.to_string(),
            message,
            field_errors,
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::Store(StoreError::Sqlx(error))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::internal(error.to_string())
    }
}

impl From<audit_core::EnumParseError> for ApiError {
    fn from(error: audit_core::EnumParseError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Create a success response
pub fn api_success<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data,
        metadata: None,
    }
}

/// Create a success response with metadata
pub fn api_success_with_meta<T>(data: T, metadata: ResponseMetadata) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        data,
        metadata: Some(metadata),
    }
}
