use crate::errors::TriageResult;
use crate::models::LabeledExample;

/// Source of labeled training examples.
pub trait IExampleGenerator: Send + Sync {
    /// Produce up to `count` examples with ground truth attached.
    ///
    /// A missing credential must surface as `TriageError::Config`, distinct
    /// from transient service failures.
    fn generate(&self, count: usize) -> TriageResult<Vec<LabeledExample>>;

    /// Readiness probe run before any cycle starts.
    fn check_ready(&self) -> TriageResult<()> {
        Ok(())
    }
}
