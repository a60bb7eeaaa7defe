use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote backend exposing generation, classification, and feedback endpoints.
///
/// Generation calls get the longest timeout since they wait on an external
/// language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub generation_timeout_secs: u64,
    pub classify_timeout_secs: u64,
    pub feedback_timeout_secs: u64,
    pub health_timeout_secs: u64,
}

impl BackendConfig {
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn classify_timeout(&self) -> Duration {
        Duration::from_secs(self.classify_timeout_secs)
    }

    pub fn feedback_timeout(&self) -> Duration {
        Duration::from_secs(self.feedback_timeout_secs)
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BACKEND_URL.to_string(),
            generation_timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            classify_timeout_secs: defaults::DEFAULT_CLASSIFY_TIMEOUT_SECS,
            feedback_timeout_secs: defaults::DEFAULT_FEEDBACK_TIMEOUT_SECS,
            health_timeout_secs: defaults::DEFAULT_HEALTH_TIMEOUT_SECS,
        }
    }
}
