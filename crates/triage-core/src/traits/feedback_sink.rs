use crate::errors::TriageResult;

/// Destination for corrections. Duplicate corrections are allowed and
/// simply accumulate.
pub trait IFeedbackSink: Send + Sync {
    fn record_feedback(&self, subject: &str, body: &str, correct_category: &str)
        -> TriageResult<()>;
}
