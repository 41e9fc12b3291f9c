//! Route definitions for the AuditFlow server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{action_plans, answers, auditees, audits, auth, health, nonconformities, questions},
    openapi,
    server::AuditServer,
};

/// Create health check routes
pub fn health_routes() -> Router<AuditServer> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create authentication routes
pub fn auth_routes() -> Router<AuditServer> {
    Router::new().route("/auth/login", post(auth::login))
}

/// Create auditee profile routes
pub fn auditee_routes() -> Router<AuditServer> {
    Router::new().route("/auditees", post(auditees::upsert_auditee))
}

/// Create audit lifecycle routes
pub fn audit_routes() -> Router<AuditServer> {
    Router::new()
        .route("/audits/start", post(audits::start_audit))
        .route("/audits/:id/answers", get(answers::list_answers))
        .route("/audits/:id/answers", post(answers::save_answer))
        .route(
            "/audits/:id/nonconformities",
            post(nonconformities::save_nonconformity),
        )
        .route("/audits/:id/complete", post(audits::complete_audit))
}

/// Create question bank routes
pub fn question_routes() -> Router<AuditServer> {
    Router::new().route("/questions/bulk", post(questions::bulk_resolve_questions))
}

/// Create action plan routes
pub fn action_plan_routes() -> Router<AuditServer> {
    Router::new().route("/action-plans", post(action_plans::create_action_plan))
}

/// Create API documentation routes
pub fn docs_routes() -> Router<AuditServer> {
    Router::new().route("/openapi.json", get(openapi::openapi_json))
}

/// Create all application routes
pub fn create_routes() -> Router<AuditServer> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(auditee_routes())
        .merge(audit_routes())
        .merge(question_routes())
        .merge(action_plan_routes())
        .merge(docs_routes())
}
