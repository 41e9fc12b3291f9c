//! OpenAPI documentation for the AuditFlow API

use axum::response::Json;
use utoipa::OpenApi;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AuditFlow API",
        version = "0.1.0",
        description = "Audit lifecycle and scoring API: question bank resolution, audit sessions, answer recording, non-conformity tracking and completion scoring",
        license(name = "AGPL-3.0-only")
    ),
    paths(
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,
        crate::handlers::auth::login,
        crate::handlers::auditees::upsert_auditee,
        crate::handlers::audits::start_audit,
        crate::handlers::audits::complete_audit,
        crate::handlers::questions::bulk_resolve_questions,
        crate::handlers::answers::save_answer,
        crate::handlers::answers::list_answers,
        crate::handlers::nonconformities::save_nonconformity,
        crate::handlers::action_plans::create_action_plan,
    ),
    components(schemas(
        crate::handlers::health::HealthResponse,
        crate::handlers::health::VersionResponse,
        crate::handlers::auth::LoginRequest,
        crate::handlers::auditees::UpsertAuditeeRequest,
        crate::handlers::audits::StartAuditRequest,
        crate::handlers::audits::CompleteAuditRequest,
        crate::handlers::questions::BulkQuestionsRequest,
        crate::handlers::questions::QuestionDefinitionRequest,
        crate::handlers::questions::BulkQuestionsResponse,
        crate::handlers::answers::SaveAnswerRequest,
        crate::handlers::answers::SaveAnswerResponse,
        crate::handlers::answers::AnswerListResponse,
        crate::handlers::nonconformities::SaveNonConformityRequest,
        crate::handlers::nonconformities::SaveNonConformityResponse,
        crate::handlers::action_plans::CreateActionPlanRequest,
        crate::handlers::action_plans::ActionStepRequest,
        crate::handlers::action_plans::ActionPlanResponse,
        audit_store::Auditee,
        audit_store::Audit,
        audit_store::CompletedAudit,
        audit_store::AnswerDetail,
        audit_store::ServiceAccount,
        audit_store::ResolvedQuestion,
    )),
    tags(
        (name = "health", description = "Service health and version endpoints"),
        (name = "auth", description = "Service account authentication"),
        (name = "auditees", description = "Auditee profile management"),
        (name = "audits", description = "Audit lifecycle, answers and findings"),
        (name = "questions", description = "Versioned question bank"),
        (name = "action-plans", description = "Remediation action plans"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
