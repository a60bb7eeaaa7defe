use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Continuous training loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of cycles per continuous run.
    pub cycles: u32,
    /// Examples requested per cycle.
    pub batch_size: usize,
    /// Pause between cycles (seconds). Never applied after the last cycle.
    pub delay_secs: u64,
    /// Classify the examples of one batch on the rayon pool.
    pub parallel_classification: bool,
}

impl TrainingConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::DEFAULT_CYCLES,
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            delay_secs: defaults::DEFAULT_DELAY_SECS,
            parallel_classification: defaults::DEFAULT_PARALLEL_CLASSIFICATION,
        }
    }
}
