//! Adapters for the training backend's HTTP API.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use triage_core::config::BackendConfig;
use triage_core::errors::{ConfigError, ServiceError, TriageError, TriageResult};
use triage_core::models::{AnswerKeyEntry, LabeledExample, Prediction};
use triage_core::traits::{IClassifier, IExampleGenerator, IFeedbackSink};

use crate::http::{endpoint, JsonClient};

const SERVICE: &str = "backend";

/// Shared connection settings for the backend adapters.
#[derive(Clone)]
pub struct BackendClient {
    http: JsonClient,
    base_url: String,
    generation_timeout: Duration,
    classify_timeout: Duration,
    feedback_timeout: Duration,
    health_timeout: Duration,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> TriageResult<Self> {
        let base_url = config.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "backend.base_url".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            http: JsonClient::new(SERVICE)?,
            base_url: base_url.to_string(),
            generation_timeout: config.generation_timeout(),
            classify_timeout: config.classify_timeout(),
            feedback_timeout: config.feedback_timeout(),
            health_timeout: config.health_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

// ── Generation ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateEmailsRequest {
    count: usize,
}

/// One generated email as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedEmail {
    pub id: u64,
    pub subject: String,
    pub body: String,
}

/// Body of a successful `/generate-emails` call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub emails: Vec<GeneratedEmail>,
    #[serde(default)]
    pub answer_key: Vec<AnswerKeyEntry>,
}

/// Attach ground truth to each email. Emails with no answer-key entry are
/// dropped.
pub fn label_examples(response: GenerationResponse) -> Vec<LabeledExample> {
    let key: HashMap<u64, String> = response
        .answer_key
        .into_iter()
        .map(|e| (e.id, e.correct_category))
        .collect();

    response
        .emails
        .into_iter()
        .filter_map(|email| match key.get(&email.id) {
            Some(category) => Some(LabeledExample {
                id: email.id,
                subject: email.subject,
                body: email.body,
                true_category: category.clone(),
            }),
            None => {
                tracing::warn!(example_id = email.id, "no answer-key entry, dropping example");
                None
            }
        })
        .collect()
}

/// Recognize a backend failure caused by a missing upstream API key.
pub fn credential_error(error: &ServiceError) -> Option<ConfigError> {
    let ServiceError::Status { status, body, .. } = error else {
        return None;
    };
    let lower = body.to_lowercase();
    let mentions_key = lower.contains("api key") || lower.contains("api_key");
    if *status == 401 || *status == 403 || mentions_key {
        return Some(ConfigError::MissingCredential {
            service: SERVICE.to_string(),
            hint: "the backend's generator API key is not set".to_string(),
        });
    }
    None
}

fn with_credential_check(error: ServiceError) -> TriageError {
    match credential_error(&error) {
        Some(config) => config.into(),
        None => error.into(),
    }
}

/// Example generator backed by `POST /generate-emails`.
pub struct HttpExampleGenerator {
    client: BackendClient,
}

impl HttpExampleGenerator {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl IExampleGenerator for HttpExampleGenerator {
    fn generate(&self, count: usize) -> TriageResult<Vec<LabeledExample>> {
        let response: GenerationResponse = self
            .client
            .http
            .post(
                &self.client.url("generate-emails"),
                &GenerateEmailsRequest { count },
                self.client.generation_timeout,
            )
            .map_err(with_credential_check)?;
        let examples = label_examples(response);
        tracing::debug!(requested = count, received = examples.len(), "examples generated");
        Ok(examples)
    }

    fn check_ready(&self) -> TriageResult<()> {
        self.client
            .http
            .get_ok(&self.client.url("categories"), self.client.health_timeout)
            .map_err(with_credential_check)
    }
}

// ── Classification ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    subject: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    category: String,
    #[serde(default)]
    confidence: f64,
}

/// Classifier backed by `POST /classify`.
pub struct HttpClassifier {
    client: BackendClient,
}

impl HttpClassifier {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl IClassifier for HttpClassifier {
    fn classify(&self, subject: &str, body: &str) -> TriageResult<Prediction> {
        let response: ClassifyResponse = self.client.http.post(
            &self.client.url("classify"),
            &ClassifyRequest { subject, body },
            self.client.classify_timeout,
        )?;
        if response.category.trim().is_empty() {
            return Err(ServiceError::Unparseable {
                service: SERVICE.to_string(),
                reason: "response has no category".to_string(),
            }
            .into());
        }
        Ok(Prediction::new(response.category, response.confidence))
    }
}

// ── Feedback ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct FeedbackEmail<'a> {
    subject: &'a str,
    body: &'a str,
}

#[derive(Serialize)]
struct FeedbackRequest<'a> {
    email: FeedbackEmail<'a>,
    correct_category: &'a str,
}

/// Feedback sink backed by `POST /feedback`.
pub struct HttpFeedbackSink {
    client: BackendClient,
}

impl HttpFeedbackSink {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl IFeedbackSink for HttpFeedbackSink {
    fn record_feedback(&self, subject: &str, body: &str, correct_category: &str) -> TriageResult<()> {
        let request = FeedbackRequest {
            email: FeedbackEmail { subject, body },
            correct_category,
        };
        self.client.http.post_unit(
            &self.client.url("feedback"),
            &request,
            self.client.feedback_timeout,
        )?;
        Ok(())
    }
}
