//! # triage-remote
//!
//! Blocking HTTP adapters implementing the collaborator traits:
//! a local LLM server for the model tier, and the training backend for
//! example generation, remote classification, and feedback.
//!
//! No call is retried; every call carries its own timeout.

pub mod backend;
mod http;
pub mod ollama;

pub use backend::{BackendClient, HttpClassifier, HttpExampleGenerator, HttpFeedbackSink};
pub use ollama::{inference_from_config, OllamaInference};
