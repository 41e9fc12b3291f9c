use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::models::{ActionPlan, NewActionStep};

/// Repository for remediation action plans
#[derive(Debug, Clone)]
pub struct ActionPlanRepository {
    pool: Pool<Postgres>,
}

impl ActionPlanRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create an action plan together with its ordered steps. The plan and
    /// all steps are committed atomically; any failure rolls back the
    /// whole submission.
    pub async fn create(
        &self,
        title: &str,
        owner: Option<&str>,
        deadline: Option<NaiveDate>,
        steps: &[NewActionStep],
    ) -> StoreResult<ActionPlan> {
        let mut tx = self.pool.begin().await?;

        let plan = sqlx::query_as::<_, ActionPlan>(
            r#"
            INSERT INTO action_plans (action_plan_id, title, owner, deadline, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING action_plan_id, title, owner, deadline, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(owner)
        .bind(deadline)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for (index, step) in steps.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO action_steps (
                    step_id, action_plan_id, position, description, due_date, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(plan.action_plan_id)
            .bind(index as i32 + 1)
            .bind(&step.description)
            .bind(step.due_date)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(plan)
    }
}
