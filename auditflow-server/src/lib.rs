//! AuditFlow Server
//!
//! HTTP API for the audit lifecycle: auditee profiles, versioned
//! question banks, audit sessions, answer recording, non-conformity
//! findings, completion scoring and remediation action plans.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod utils;
pub mod validation;

pub use error::{
    api_success, api_success_with_meta, ApiError, ApiErrorResponse, ApiResponse, ApiResult,
    ResponseMetadata,
};
pub use server::{AuditServer, ServerConfig};

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes and middleware
pub fn create_app(server: AuditServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
