use crate::errors::ServiceError;

/// Text-completion service used by the model-backed classification tier.
pub trait IInference: Send + Sync {
    /// Send a prompt, return the raw completion text.
    fn complete(&self, prompt: &str) -> Result<String, ServiceError>;

    /// Service name for logs.
    fn name(&self) -> &str;
}

/// Inference that is never available. The classifier degrades straight to
/// its deterministic tiers.
pub struct NoInference;

impl IInference for NoInference {
    fn complete(&self, _prompt: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Disabled {
            service: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "no-inference"
    }
}
