use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Model-backed classification tier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// When false, classification goes straight to the deterministic tiers.
    pub enabled: bool,
    /// Base URL of the completion service.
    pub base_url: String,
    /// Model name sent with every request.
    pub model: String,
    /// Per-call timeout (seconds).
    pub timeout_secs: u64,
    pub temperature: f64,
    pub top_p: f64,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl InferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_INFERENCE_ENABLED,
            base_url: defaults::DEFAULT_INFERENCE_URL.to_string(),
            model: defaults::DEFAULT_INFERENCE_MODEL.to_string(),
            timeout_secs: defaults::DEFAULT_INFERENCE_TIMEOUT_SECS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            top_p: defaults::DEFAULT_TOP_P,
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
        }
    }
}
