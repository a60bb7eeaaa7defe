//! Top-level error aggregating every subsystem error via `From` conversions.

use super::error_code::ErrorCode;
use super::{ConfigError, ServiceError, StoreError, ValidationError};

/// Any error a triage operation can return.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TriageError {
    /// Transient failures are absorbed by falling back or skipping.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Service(_))
    }

    /// Configuration failures are the only class fatal to an operation
    /// before it starts.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl ErrorCode for TriageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type TriageResult<T> = Result<T, TriageError>;
