//! Structured log events for key training-loop operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a training cycle.
pub fn cycle_started(cycle: u32, batch_size: usize) {
    tracing::info!(
        event = "cycle_started",
        cycle = cycle,
        batch_size = batch_size,
        "training cycle started"
    );
}

/// Log a completed training cycle.
pub fn cycle_completed(cycle: u32, total: usize, correct: usize, accuracy: f64, duration_ms: u128) {
    tracing::info!(
        event = "cycle_completed",
        cycle = cycle,
        total = total,
        correct = correct,
        accuracy = accuracy,
        duration_ms = duration_ms as u64,
        "training cycle completed"
    );
}

/// Log a cycle that produced no result.
pub fn cycle_failed(cycle: u32, reason: &str, detail: &str) {
    tracing::error!(
        event = "cycle_failed",
        cycle = cycle,
        reason = %reason,
        detail = %detail,
        "training cycle failed"
    );
}

/// Log a classification tier falling through to the next one.
pub fn tier_degraded(tier: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "tier_degraded",
        tier = %tier,
        failure = %failure,
        fallback = %fallback,
        "classification tier degraded"
    );
}

/// Log an example skipped inside a cycle.
pub fn example_skipped(example_id: u64, reason: &str) {
    tracing::warn!(
        event = "example_skipped",
        example_id = example_id,
        reason = %reason,
        "example skipped"
    );
}

/// Log a persisted correction.
pub fn feedback_recorded(fingerprint: &str, correct_category: &str) {
    tracing::debug!(
        event = "feedback_recorded",
        fingerprint = %fingerprint,
        correct_category = %correct_category,
        "feedback recorded"
    );
}

/// Log a correction that could not be persisted.
pub fn feedback_write_failed(example_id: u64, error: &str) {
    tracing::warn!(
        event = "feedback_write_failed",
        example_id = example_id,
        error = %error,
        "feedback write failed"
    );
}

/// Log recovery from an unreadable persisted collection.
pub fn store_recovered(path: &str, details: &str) {
    tracing::warn!(
        event = "store_recovered",
        path = %path,
        details = %details,
        "unreadable collection treated as empty"
    );
}

/// Log a new category.
pub fn category_added(name: &str, total: usize) {
    tracing::info!(
        event = "category_added",
        name = %name,
        total = total,
        "category added"
    );
}

/// Log the end of a continuous run.
pub fn continuous_completed(successful: u32, failed: u32, average_accuracy: f64, cancelled: bool) {
    tracing::info!(
        event = "continuous_completed",
        successful = successful,
        failed = failed,
        average_accuracy = average_accuracy,
        cancelled = cancelled,
        "continuous training completed"
    );
}
