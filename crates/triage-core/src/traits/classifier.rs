use crate::errors::TriageResult;
use crate::models::Prediction;

/// Anything that can assign a category to an example.
///
/// The local engine never fails; remote classifiers may return transient
/// service errors, which the orchestrator turns into skipped examples.
pub trait IClassifier: Send + Sync {
    fn classify(&self, subject: &str, body: &str) -> TriageResult<Prediction>;
}
