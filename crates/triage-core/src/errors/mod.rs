//! Error handling for triage.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod service_error;
pub mod store_error;
pub mod triage_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use service_error::ServiceError;
pub use store_error::StoreError;
pub use triage_error::{TriageError, TriageResult};
pub use validation_error::ValidationError;
