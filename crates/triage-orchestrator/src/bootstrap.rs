//! Assemble a training loop from configuration.
//!
//! Local classification engine and file-backed stores; examples come from
//! the training backend.

use std::sync::Arc;

use triage_classifier::ClassificationEngine;
use triage_core::config::TriageConfig;
use triage_core::errors::TriageResult;
use triage_core::traits::CancellationToken;
use triage_feedback::{CategoryStore, FeedbackStore};
use triage_remote::{inference_from_config, BackendClient, HttpExampleGenerator};

use crate::orchestrator::TrainingOrchestrator;
use crate::report::ContinuousReport;

/// Validate `config` and wire every collaborator.
pub fn build_from_config(config: &TriageConfig) -> TriageResult<TrainingOrchestrator> {
    TriageConfig::validate(config)?;

    let inference = inference_from_config(&config.inference)?;
    let categories = Arc::new(CategoryStore::open(&config.feedback.categories_path));
    let engine = ClassificationEngine::new(categories, inference);
    let feedback = Arc::new(FeedbackStore::open(&config.feedback.feedback_path));
    let generator = HttpExampleGenerator::new(BackendClient::new(&config.backend)?);

    tracing::info!(
        backend = %config.backend.base_url,
        inference_enabled = config.inference.enabled,
        feedback_path = %config.feedback.feedback_path.display(),
        "training loop assembled"
    );

    Ok(
        TrainingOrchestrator::new(Arc::new(generator), Arc::new(engine), feedback)
            .with_training_config(&config.training),
    )
}

/// Build, preflight, and run the configured number of cycles.
pub fn run_from_config(
    config: &TriageConfig,
    cancel: CancellationToken,
) -> TriageResult<ContinuousReport> {
    let mut orchestrator = build_from_config(config)?.with_cancellation(cancel);
    orchestrator.preflight()?;
    orchestrator.run_continuous(
        config.training.cycles,
        config.training.batch_size,
        config.training.delay(),
    )
}
