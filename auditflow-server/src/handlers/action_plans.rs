//! Action plan handlers

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use audit_store::NewActionStep;

use crate::{
    error::{api_success, ApiError, ApiResponse},
    server::AuditServer,
    utils::timestamps::parse_date,
    validation::RequestValidation,
    validate_length, validate_required,
};

/// One step within an action plan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ActionStepRequest {
    /// What has to be done
    pub description: String,
    /// Step due date (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Create action plan request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateActionPlanRequest {
    /// Plan title
    pub title: String,
    /// Person owning the plan
    #[serde(default)]
    pub owner: Option<String>,
    /// Overall deadline (YYYY-MM-DD)
    #[serde(default)]
    pub deadline: Option<String>,
    /// Ordered remediation steps
    #[serde(default)]
    pub steps: Vec<ActionStepRequest>,
}

impl RequestValidation for CreateActionPlanRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_required!(self.title, "Title is required");
        validate_length!(self.title, 1, 200, "Title must be 1-200 characters");
        for step in &self.steps {
            validate_required!(step.description, "Step description is required");
        }
        Ok(())
    }
}

/// Create action plan response payload
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionPlanResponse {
    pub action_plan_id: Uuid,
    pub step_count: usize,
}

/// Create a remediation action plan with its steps
///
/// The plan and all of its steps are stored in one transaction; a
/// failure on any step leaves nothing behind.
#[utoipa::path(
    post,
    path = "/action-plans",
    request_body = CreateActionPlanRequest,
    responses(
        (status = 201, description = "Action plan created", body = ActionPlanResponse),
        (status = 400, description = "Invalid action plan data")
    ),
    tag = "action-plans"
)]
pub async fn create_action_plan(
    State(server): State<AuditServer>,
    Json(request): Json<CreateActionPlanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActionPlanResponse>>), ApiError> {
    request.validate()?;

    let deadline = request
        .deadline
        .as_deref()
        .map(|value| parse_date("deadline", value))
        .transpose()?;

    let steps = request
        .steps
        .iter()
        .map(|step| {
            Ok(NewActionStep {
                description: step.description.clone(),
                due_date: step
                    .due_date
                    .as_deref()
                    .map(|value| parse_date("step due_date", value))
                    .transpose()?,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let plan = server
        .action_plan_repo
        .create(&request.title, request.owner.as_deref(), deadline, &steps)
        .await?;

    info!(
        action_plan_id = %plan.action_plan_id,
        step_count = steps.len(),
        "Action plan created"
    );

    Ok((
        StatusCode::CREATED,
        Json(api_success(ActionPlanResponse {
            action_plan_id: plan.action_plan_id,
            step_count: steps.len(),
        })),
    ))
}
