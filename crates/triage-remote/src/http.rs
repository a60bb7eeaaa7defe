//! JSON-over-HTTP plumbing shared by the adapters.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use triage_core::errors::ServiceError;

/// Longest response body kept in a status error.
const MAX_ERROR_BODY: usize = 500;

#[derive(Clone)]
pub(crate) struct JsonClient {
    service: &'static str,
    inner: reqwest::blocking::Client,
}

impl JsonClient {
    pub(crate) fn new(service: &'static str) -> Result<Self, ServiceError> {
        let inner = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ServiceError::Network {
                service: service.to_string(),
                reason: format!("client setup failed: {e}"),
            })?;
        Ok(Self { service, inner })
    }

    pub(crate) fn post<B, R>(&self, url: &str, body: &B, timeout: Duration) -> Result<R, ServiceError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.inner.post(url).json(body).timeout(timeout);
        let text = self.send(request, timeout)?;
        self.decode(&text)
    }

    /// POST and ignore the response body.
    pub(crate) fn post_unit<B>(&self, url: &str, body: &B, timeout: Duration) -> Result<(), ServiceError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.inner.post(url).json(body).timeout(timeout);
        self.send(request, timeout).map(|_| ())
    }

    pub(crate) fn get_ok(&self, url: &str, timeout: Duration) -> Result<(), ServiceError> {
        let request = self.inner.get(url).timeout(timeout);
        self.send(request, timeout).map(|_| ())
    }

    fn send(
        &self,
        request: reqwest::blocking::RequestBuilder,
        timeout: Duration,
    ) -> Result<String, ServiceError> {
        let response = request.send().map_err(|e| self.transport_error(e, timeout))?;
        let status = response.status();
        let text = response
            .text()
            .map_err(|e| self.transport_error(e, timeout))?;

        if !status.is_success() {
            return Err(ServiceError::Status {
                service: self.service.to_string(),
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }
        Ok(text)
    }

    fn decode<R: DeserializeOwned>(&self, text: &str) -> Result<R, ServiceError> {
        serde_json::from_str(text).map_err(|e| ServiceError::Unparseable {
            service: self.service.to_string(),
            reason: e.to_string(),
        })
    }

    fn transport_error(&self, e: reqwest::Error, timeout: Duration) -> ServiceError {
        if e.is_timeout() {
            ServiceError::Timeout {
                service: self.service.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            }
        } else {
            ServiceError::Network {
                service: self.service.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Join a base URL and a path with exactly one slash.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        assert_eq!(endpoint("http://h:1/", "/classify"), "http://h:1/classify");
        assert_eq!(endpoint("http://h:1", "api/generate"), "http://h:1/api/generate");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé…");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
