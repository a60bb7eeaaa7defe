//! ErrorCode trait for boundary layers.

/// Trait for converting triage errors to stable error code strings.
/// Every error enum implements this so transports and reports can match on
/// a code instead of a message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SERVICE_TIMEOUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_CREDENTIAL: &str = "MISSING_CREDENTIAL";
pub const SERVICE_TIMEOUT: &str = "SERVICE_TIMEOUT";
pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
pub const SERVICE_BAD_RESPONSE: &str = "SERVICE_BAD_RESPONSE";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const STORE_CORRUPT: &str = "STORE_CORRUPT";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
