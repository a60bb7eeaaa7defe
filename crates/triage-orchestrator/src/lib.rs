//! # triage-orchestrator
//!
//! Drives the training loop: request labeled examples, classify each one,
//! compare against ground truth, and record a correction for every
//! mismatch. Failures are contained per example and per cycle.

pub mod bootstrap;
pub mod labeling;
pub mod orchestrator;
pub mod report;

pub use bootstrap::{build_from_config, run_from_config};
pub use labeling::{score_labels, LabelOutcome, LabelScore};
pub use orchestrator::TrainingOrchestrator;
pub use report::{ContinuousReport, FailedCycle};
