//! Server state shared across all request handlers

use sqlx::PgPool;

use audit_store::{
    AccountRepository, ActionPlanRepository, AnswerRepository, AuditRepository,
    AuditeeRepository, NonConformityRepository, QuestionRepository,
};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "AuditFlow Server".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Shared application state holding the pool and all repositories
///
/// A clone is cheap: the pool and every repository are handles over the
/// same underlying connection pool.
#[derive(Clone)]
pub struct AuditServer {
    pub config: ServerConfig,
    pub db_pool: PgPool,
    pub account_repo: AccountRepository,
    pub auditee_repo: AuditeeRepository,
    pub audit_repo: AuditRepository,
    pub question_repo: QuestionRepository,
    pub answer_repo: AnswerRepository,
    pub nonconformity_repo: NonConformityRepository,
    pub action_plan_repo: ActionPlanRepository,
}

impl AuditServer {
    /// Create server state with the default configuration
    pub fn new_with_pool(pool: PgPool) -> Self {
        Self::new_with_pool_and_config(pool, ServerConfig::default())
    }

    /// Create server state with an explicit configuration
    pub fn new_with_pool_and_config(pool: PgPool, config: ServerConfig) -> Self {
        Self {
            config,
            account_repo: AccountRepository::new(pool.clone()),
            auditee_repo: AuditeeRepository::new(pool.clone()),
            audit_repo: AuditRepository::new(pool.clone()),
            question_repo: QuestionRepository::new(pool.clone()),
            answer_repo: AnswerRepository::new(pool.clone()),
            nonconformity_repo: NonConformityRepository::new(pool.clone()),
            action_plan_repo: ActionPlanRepository::new(pool.clone()),
            db_pool: pool,
        }
    }
}
