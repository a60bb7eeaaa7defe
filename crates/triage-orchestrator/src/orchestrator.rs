//! The training loop.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use rayon::prelude::*;
use triage_core::config::TrainingConfig;
use triage_core::constants::MAX_GENERATION_BATCH;
use triage_core::errors::{TriageResult, ValidationError};
use triage_core::models::{CycleFailure, CycleResult, LabeledExample, Prediction};
use triage_core::traits::{
    Cancellable, CancellationToken, IClassifier, IExampleGenerator, IFeedbackSink,
};
use triage_observability::events;
use triage_session::SessionStats;

use crate::report::{ContinuousReport, FailedCycle};

/// Granularity of the cancellable inter-cycle sleep.
const DELAY_SLICE: Duration = Duration::from_millis(100);

/// Runs generate → classify → score → correct cycles against the three
/// collaborators and keeps session statistics.
pub struct TrainingOrchestrator {
    generator: Arc<dyn IExampleGenerator>,
    classifier: Arc<dyn IClassifier>,
    feedback: Arc<dyn IFeedbackSink>,
    stats: SessionStats,
    parallel: bool,
    cancel: CancellationToken,
    cycles_run: u32,
}

impl TrainingOrchestrator {
    pub fn new(
        generator: Arc<dyn IExampleGenerator>,
        classifier: Arc<dyn IClassifier>,
        feedback: Arc<dyn IFeedbackSink>,
    ) -> Self {
        Self {
            generator,
            classifier,
            feedback,
            stats: SessionStats::new(),
            parallel: false,
            cancel: CancellationToken::new(),
            cycles_run: 0,
        }
    }

    /// Apply the `training` config section.
    pub fn with_training_config(mut self, config: &TrainingConfig) -> Self {
        self.parallel = config.parallel_classification;
        self
    }

    /// Classify each batch on the rayon pool.
    pub fn with_parallel_classification(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Share a cancellation token with the caller.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Check the generator is usable before any cycle runs.
    ///
    /// A configuration error (missing credential) here is fatal for the
    /// whole run; nothing later in the loop is.
    pub fn preflight(&self) -> TriageResult<()> {
        self.generator.check_ready()
    }

    /// Run one cycle with `batch_size` examples.
    ///
    /// A failed cycle records no accuracy sample.
    pub fn run_cycle(&mut self, batch_size: usize) -> Result<CycleResult, CycleFailure> {
        self.cycles_run += 1;
        let cycle = self.cycles_run;
        let span = triage_observability::cycle_span!(cycle, batch_size);
        let _enter = span.enter();

        events::cycle_started(cycle, batch_size);
        match self.execute_cycle(batch_size) {
            Ok(result) => {
                self.stats.record_cycle(&result);
                events::cycle_completed(
                    cycle,
                    result.total,
                    result.correct,
                    result.accuracy,
                    result.duration.as_millis(),
                );
                Ok(result)
            }
            Err(failure) => {
                self.stats.record_failure(&failure);
                let detail = failure.to_string();
                events::cycle_failed(cycle, failure.reason(), &detail);
                Err(failure)
            }
        }
    }

    fn execute_cycle(&self, batch_size: usize) -> Result<CycleResult, CycleFailure> {
        let started_at = Utc::now();
        let clock = Instant::now();

        let examples = self
            .generator
            .generate(batch_size)
            .map_err(|e| CycleFailure::GenerationFailed {
                detail: e.to_string(),
            })?;
        if examples.is_empty() {
            return Err(CycleFailure::GenerationFailed {
                detail: "generator returned no examples".to_string(),
            });
        }

        let predictions = self.classify_all(&examples);

        let mut tally = Tally::default();
        for (example, prediction) in examples.iter().zip(predictions) {
            let Some(prediction) = prediction else {
                tally.skipped += 1;
                continue;
            };
            if example.true_category.trim().is_empty() {
                events::example_skipped(example.id, "no ground truth for example");
                tally.skipped += 1;
                continue;
            }
            if prediction.category == example.true_category {
                tally.correct += 1;
                continue;
            }

            tally.incorrect += 1;
            tracing::debug!(
                example_id = example.id,
                predicted = %prediction.category,
                expected = %example.true_category,
                "misclassified"
            );
            match self
                .feedback
                .record_feedback(&example.subject, &example.body, &example.true_category)
            {
                Ok(()) => tally.feedback_applied += 1,
                Err(e) => {
                    events::feedback_write_failed(example.id, &e.to_string());
                    tally.feedback_failed += 1;
                }
            }
        }

        if tally.correct + tally.incorrect == 0 {
            return Err(CycleFailure::ClassificationFailed {
                attempted: examples.len(),
            });
        }

        Ok(CycleResult::new(
            started_at,
            examples.len(),
            tally.correct,
            tally.incorrect,
            tally.skipped,
            tally.feedback_applied,
            tally.feedback_failed,
            clock.elapsed(),
        ))
    }

    /// One entry per example, in batch order; `None` marks a skipped example.
    fn classify_all(&self, examples: &[LabeledExample]) -> Vec<Option<Prediction>> {
        if self.parallel {
            examples
                .par_iter()
                .map(|example| self.classify_one(example))
                .collect()
        } else {
            examples
                .iter()
                .map(|example| self.classify_one(example))
                .collect()
        }
    }

    fn classify_one(&self, example: &LabeledExample) -> Option<Prediction> {
        let span = triage_observability::classification_span!(example.id);
        let _enter = span.enter();

        match self.classifier.classify(&example.subject, &example.body) {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                events::example_skipped(example.id, &e.to_string());
                None
            }
        }
    }

    /// Run `cycle_count` cycles back to back, pausing `delay` between them.
    ///
    /// Arguments are validated before any cycle starts. Failed cycles are
    /// counted and the run continues. Cancellation is observed before each
    /// cycle and during the pause.
    pub fn run_continuous(
        &mut self,
        cycle_count: u32,
        batch_size: usize,
        delay: Duration,
    ) -> TriageResult<ContinuousReport> {
        if cycle_count == 0 {
            return Err(ValidationError::OutOfRange {
                field: "cycle_count".to_string(),
                value: 0,
                min: 1,
                max: u32::MAX as usize,
            }
            .into());
        }
        validate_batch_size(batch_size)?;

        let span = triage_observability::continuous_span!(cycle_count, batch_size);
        let _enter = span.enter();
        let clock = Instant::now();

        let mut report = ContinuousReport {
            total_cycles: cycle_count,
            cycles_attempted: 0,
            successful_cycles: 0,
            failed_cycles: 0,
            failures: Vec::new(),
            total_duration: Duration::ZERO,
            total_examples_generated: 0,
            total_classifications: 0,
            total_feedback_applied: 0,
            total_feedback_failed: 0,
            average_accuracy: 0.0,
            accuracy_trend: Vec::new(),
            cancelled: false,
        };

        for n in 1..=cycle_count {
            if self.cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }
            report.cycles_attempted += 1;

            match self.run_cycle(batch_size) {
                Ok(result) => {
                    report.successful_cycles += 1;
                    report.total_examples_generated += result.generated;
                    report.total_classifications += result.total;
                    report.total_feedback_applied += result.feedback_applied;
                    report.total_feedback_failed += result.feedback_failed;
                    report.accuracy_trend.push(result.accuracy);
                }
                Err(failure) => {
                    report.failed_cycles += 1;
                    if let CycleFailure::ClassificationFailed { attempted } = &failure {
                        report.total_examples_generated += attempted;
                    }
                    report.failures.push(FailedCycle { cycle: n, failure });
                }
            }

            if n < cycle_count && !self.pause(delay) {
                report.cancelled = true;
                break;
            }
        }

        if !report.accuracy_trend.is_empty() {
            report.average_accuracy =
                report.accuracy_trend.iter().sum::<f64>() / report.accuracy_trend.len() as f64;
        }
        report.total_duration = clock.elapsed();

        events::continuous_completed(
            report.successful_cycles,
            report.failed_cycles,
            report.average_accuracy,
            report.cancelled,
        );
        Ok(report)
    }

    /// Sleep for `delay` in slices. Returns `false` if cancelled meanwhile.
    fn pause(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            if self.cancel.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep(DELAY_SLICE.min(deadline - now));
        }
    }
}

fn validate_batch_size(batch_size: usize) -> Result<(), ValidationError> {
    if batch_size == 0 || batch_size > MAX_GENERATION_BATCH {
        return Err(ValidationError::OutOfRange {
            field: "batch_size".to_string(),
            value: batch_size,
            min: 1,
            max: MAX_GENERATION_BATCH,
        });
    }
    Ok(())
}

#[derive(Default)]
struct Tally {
    correct: usize,
    incorrect: usize,
    skipped: usize,
    feedback_applied: usize,
    feedback_failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_size_bounds() {
        assert!(validate_batch_size(0).is_err());
        assert!(validate_batch_size(1).is_ok());
        assert!(validate_batch_size(MAX_GENERATION_BATCH).is_ok());
        assert!(validate_batch_size(MAX_GENERATION_BATCH + 1).is_err());
    }
}
