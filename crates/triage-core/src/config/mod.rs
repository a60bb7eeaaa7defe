//! Configuration system for triage.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod backend_config;
pub mod defaults;
pub mod feedback_config;
pub mod inference_config;
pub mod observability_config;
pub mod training_config;
pub mod triage_config;

pub use backend_config::BackendConfig;
pub use feedback_config::FeedbackConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
pub use training_config::TrainingConfig;
pub use triage_config::TriageConfig;
