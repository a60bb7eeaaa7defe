//! Input validation errors. Rejected immediately, nothing is processed.

use super::error_code::{self, ErrorCode};

/// Malformed input to a triage operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("field must not be empty: {field}")]
    EmptyField { field: String },

    #[error("{field} = {value} is out of range {min}..={max}")]
    OutOfRange {
        field: String,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
