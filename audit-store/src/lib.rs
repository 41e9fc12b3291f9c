//! PostgreSQL persistence layer for AuditFlow.
//!
//! One repository per aggregate, all built on a shared [`DatabasePool`]:
//! - [`AuditeeRepository`] — auditee profiles, upserted on case-insensitive email
//! - [`AuditRepository`] — audit sessions, from start to scored completion
//! - [`QuestionRepository`] — the versioned question bank
//! - [`AnswerRepository`] — answers with bounded attempts
//! - [`NonConformityRepository`] — findings raised during an audit
//! - [`AccountRepository`] — service accounts for the name/access-code login
//! - [`ActionPlanRepository`] — remediation action plans and their steps
//!
//! Queries are runtime-checked `sqlx` statements; multi-statement operations
//! run inside a single transaction committed at the end and rolled back on
//! any error. Schema migrations are embedded and applied through
//! [`DatabasePool::run_migrations`].

pub mod account_repository;
pub mod action_plan_repository;
pub mod answer_repository;
pub mod audit_repository;
pub mod auditee_repository;
pub mod connection;
pub mod error;
pub mod models;
pub mod nonconformity_repository;
pub mod question_repository;

pub use account_repository::AccountRepository;
pub use action_plan_repository::ActionPlanRepository;
pub use answer_repository::AnswerRepository;
pub use audit_repository::{AuditRepository, CompletionOutcome};
pub use auditee_repository::AuditeeRepository;
pub use connection::DatabasePool;
pub use error::{StoreError, StoreResult};
pub use models::*;
pub use nonconformity_repository::NonConformityRepository;
pub use question_repository::QuestionRepository;
