//! External service errors.
//!
//! Every variant is transient: callers fall back to another strategy or
//! skip the work item, never abort the process.

use super::error_code::{self, ErrorCode};

/// Failures of a call to an external collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{service} timed out after {timeout_ms}ms")]
    Timeout { service: String, timeout_ms: u64 },

    #[error("{service} unreachable: {reason}")]
    Network { service: String, reason: String },

    #[error("{service} returned status {status}: {body}")]
    Status {
        service: String,
        status: u16,
        body: String,
    },

    #[error("{service} response could not be parsed: {reason}")]
    Unparseable { service: String, reason: String },

    #[error("{service} is disabled")]
    Disabled { service: String },
}

impl ServiceError {
    /// Name of the service that failed.
    pub fn service(&self) -> &str {
        match self {
            Self::Timeout { service, .. }
            | Self::Network { service, .. }
            | Self::Status { service, .. }
            | Self::Unparseable { service, .. }
            | Self::Disabled { service } => service,
        }
    }
}

impl ErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::SERVICE_TIMEOUT,
            Self::Unparseable { .. } => error_code::SERVICE_BAD_RESPONSE,
            Self::Network { .. } | Self::Status { .. } | Self::Disabled { .. } => {
                error_code::SERVICE_UNAVAILABLE
            }
        }
    }
}
