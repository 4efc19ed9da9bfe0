//! Transport trait for the generation endpoint.

use async_trait::async_trait;
use derive_getters::Getters;
use scrivano_core::GenerateRequest;
use scrivano_error::{HttpError, JsonError};
use serde::de::DeserializeOwned;

/// A completed HTTP exchange with the generation endpoint.
///
/// Carries the response status and raw body regardless of outcome; the
/// caller decides what a non-success status means. Interpreting the body
/// is deferred until [`json`](TransportReply::json) so a malformed body
/// on an error status costs nothing.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TransportReply {
    /// HTTP status code of the response
    status: u16,
    /// Raw response body
    body: String,
}

impl TransportReply {
    /// Create a reply from a status code and raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the response status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`JsonError`] when the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, JsonError> {
        serde_json::from_str(&self.body).map_err(|e| JsonError::new(e.to_string()))
    }
}

/// The injected fetch capability.
///
/// An `Ok` reply means the exchange completed, whatever the status; `Err`
/// means the request never completed (connection failure, or an error
/// raised while awaiting the response).
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    /// POST a generation request to the endpoint.
    async fn post_generate(&self, request: &GenerateRequest) -> Result<TransportReply, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrivano_core::GenerateResponse;

    #[test]
    fn success_range_is_2xx() {
        assert!(TransportReply::new(200, "").is_success());
        assert!(TransportReply::new(204, "").is_success());
        assert!(!TransportReply::new(199, "").is_success());
        assert!(!TransportReply::new(301, "").is_success());
        assert!(!TransportReply::new(500, "").is_success());
    }

    #[test]
    fn json_parses_generation_responses() {
        let reply = TransportReply::new(200, r#"{"content":"Generated."}"#);
        let response: GenerateResponse = reply.json().expect("Parseable body");
        assert_eq!(response.content(), "Generated.");
    }

    #[test]
    fn json_reports_malformed_bodies() {
        let reply = TransportReply::new(200, "<html>oops</html>");
        assert!(reply.json::<GenerateResponse>().is_err());
    }
}
