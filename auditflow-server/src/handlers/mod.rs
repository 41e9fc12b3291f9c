//! HTTP request handlers
//!
//! Each module owns the request/response types and the validation rules
//! for one resource group.

pub mod action_plans;
pub mod answers;
pub mod auditees;
pub mod audits;
pub mod auth;
pub mod health;
pub mod nonconformities;
pub mod questions;
