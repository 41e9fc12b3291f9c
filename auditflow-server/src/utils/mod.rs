//! Shared utilities for request handlers

pub mod timestamps;
