//! Application Error Types
//!
//! Centralized error handling for the client core. Errors here describe
//! failures at the boundaries (gateways, persistence, validation); the
//! state store itself never fails and normalizes malformed input instead.

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error indicates an expired or missing session.
    ///
    /// Callers use this to decide between re-authentication and a plain
    /// error notification.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

/// Field-level validation error
#[derive(Debug, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
