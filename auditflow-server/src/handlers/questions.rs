//! Question bank handlers

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use audit_store::{NewQuestion, ResolvedQuestion};

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    validation::RequestValidation,
    validate_field, validate_length, validate_required,
};

/// One question definition within a bulk registration
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionDefinitionRequest {
    /// Full question text, the identity of the question within a version
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mandatory: Option<bool>,
    /// Reference document the question was derived from
    #[serde(default)]
    pub source_doc: Option<String>,
}

/// Bulk question registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkQuestionsRequest {
    /// Question bank version the definitions belong to
    pub version_tag: String,
    /// Ordered question definitions
    pub questions: Vec<QuestionDefinitionRequest>,
}

impl RequestValidation for BulkQuestionsRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.version_tag, "Version tag is required");
        validate_length!(self.version_tag, 1, 50, "Version tag must be 1-50 characters");
        validate_field!(
            self.questions,
            !self.questions.is_empty(),
            "At least one question definition is required"
        );
        for question in &self.questions {
            validate_required!(question.text, "Question text is required");
        }
        Ok(())
    }
}

/// Bulk question registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct BulkQuestionsResponse {
    pub version_tag: String,
    pub count: usize,
    /// Resolved identifiers, one per submitted definition, in input order
    pub items: Vec<ResolvedQuestion>,
}

/// Register a batch of question definitions and resolve their identifiers
///
/// Registration is idempotent per (version_tag, text): resubmitting the
/// same batch returns the same identifiers without creating duplicates.
#[utoipa::path(
    post,
    path = "/questions/bulk",
    request_body = BulkQuestionsRequest,
    responses(
        (status = 200, description = "Definitions resolved to identifiers", body = BulkQuestionsResponse),
        (status = 400, description = "Invalid question batch")
    ),
    tag = "questions"
)]
pub async fn bulk_resolve_questions(
    State(server): State<AuditServer>,
    Json(request): Json<BulkQuestionsRequest>,
) -> Result<Json<ApiResponse<BulkQuestionsResponse>>, ApiError> {
    request.validate()?;

    let definitions: Vec<NewQuestion> = request
        .questions
        .iter()
        .map(|question| NewQuestion {
            text: question.text.clone(),
            category: question.category.clone(),
            mandatory: question.mandatory.unwrap_or(false),
            source_doc: question.source_doc.clone(),
        })
        .collect();

    let items = server
        .question_repo
        .resolve_batch(&request.version_tag, &definitions)
        .await?;

    info!(
        version_tag = %request.version_tag,
        count = items.len(),
        "Question batch resolved"
    );

    Ok(Json(api_success(BulkQuestionsResponse {
        version_tag: request.version_tag,
        count: items.len(),
        items,
    })))
}
