// src/demo/error.rs
//!
//! Demo Consumer Error Types
//!

use serde::Serialize;
use thiserror::Error;

use crate::limits::Decision;

/// Errors surfaced by the demo consumer services.
///
/// A quota denial is carried verbatim from the [`Decision`] so the UI can
/// display it directly and auto-dismiss it after a few seconds.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum DemoError {
    #[error("{message}")]
    LimitExceeded { message: String },

    #[error("Validation failed: {reason}")]
    InvalidInput { reason: String },

    #[error("Product not found: {id}")]
    ProductNotFound { id: String },
}

impl DemoError {
    /// Convert a denied decision into an error. Panics in debug builds if
    /// handed an allowed decision; callers only reach this on denial.
    pub fn from_denied(decision: Decision) -> Self {
        debug_assert!(!decision.allowed);
        DemoError::LimitExceeded {
            message: decision
                .message
                .unwrap_or_else(|| "Demo limit reached".to_string()),
        }
    }
}

/// Errors from the (simulated) demo backend.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("Network error: Unable to connect to {service} service")]
    Unreachable { service: String },

    #[error("Product not found: {id}")]
    NotFound { id: String },
}
