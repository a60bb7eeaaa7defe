//! Local LLM server speaking the Ollama generate API.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use triage_core::config::InferenceConfig;
use triage_core::errors::{ConfigError, ServiceError, TriageResult};
use triage_core::traits::{IInference, NoInference};

use crate::http::{endpoint, JsonClient};

const SERVICE: &str = "ollama";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    top_p: f64,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Blocking client for `POST {base}/api/generate`.
pub struct OllamaInference {
    client: JsonClient,
    url: String,
    model: String,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    timeout: Duration,
}

impl OllamaInference {
    pub fn new(config: &InferenceConfig) -> TriageResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "inference.base_url".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            client: JsonClient::new(SERVICE)?,
            url: endpoint(&config.base_url, "api/generate"),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IInference for OllamaInference {
    fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                top_p: self.top_p,
                num_predict: self.max_tokens,
            },
        };
        let response: GenerateResponse = self.client.post(&self.url, &request, self.timeout)?;
        tracing::debug!(model = %self.model, chars = response.response.len(), "completion received");
        Ok(response.response)
    }

    fn name(&self) -> &str {
        SERVICE
    }
}

/// The configured inference service, or [`NoInference`] when disabled.
pub fn inference_from_config(config: &InferenceConfig) -> TriageResult<Arc<dyn IInference>> {
    if !config.enabled {
        tracing::info!("inference disabled, classifier will use deterministic tiers only");
        return Ok(Arc::new(NoInference));
    }
    Ok(Arc::new(OllamaInference::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let req = GenerateRequest {
            model: "llama3.2:3b",
            prompt: "p",
            stream: false,
            options: GenerateOptions {
                temperature: 0.1,
                top_p: 0.9,
                num_predict: 50,
            },
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["stream"], false);
        assert_eq!(v["options"]["num_predict"], 50);
        assert_eq!(v["model"], "llama3.2:3b");
    }

    #[test]
    fn missing_response_field_is_empty() {
        let r: GenerateResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert!(r.response.is_empty());
    }

    #[test]
    fn empty_base_url_is_a_config_error() {
        let config = InferenceConfig {
            base_url: "  ".into(),
            ..InferenceConfig::default()
        };
        let err = OllamaInference::new(&config).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn disabled_config_yields_no_inference() {
        let config = InferenceConfig {
            enabled: false,
            ..InferenceConfig::default()
        };
        let inference = inference_from_config(&config).unwrap();
        assert_eq!(inference.name(), "no-inference");
    }
}
