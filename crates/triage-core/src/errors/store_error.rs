//! Persistence errors for the feedback and category files.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while reading or writing a persisted collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("could not lock {path}: {reason}")]
    Lock { path: String, reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("corrupt collection at {path}: {details}")]
    Corrupt { path: String, details: String },
}

impl StoreError {
    /// Build an I/O error tagged with the path it happened on.
    pub fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Corrupt { .. } => error_code::STORE_CORRUPT,
            _ => error_code::STORE_ERROR,
        }
    }
}
