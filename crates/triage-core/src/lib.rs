//! # triage-core
//!
//! Foundation crate for the triage training loop.
//! Defines the data model, collaborator traits, errors, config, constants,
//! and the content fingerprint. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fingerprint;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TriageConfig;
pub use errors::{TriageError, TriageResult};
pub use models::{CategorySet, CycleFailure, CycleResult, DecisionPath, LabeledExample, Prediction};
