//! HTTP client for the generation endpoint.

use crate::ClientConfig;
use async_trait::async_trait;
use reqwest::Client;
use scrivano_core::GenerateRequest;
use scrivano_error::HttpError;
use scrivano_interface::{GenerateTransport, TransportReply};
use tracing::{debug, error, instrument};

/// Path of the generation endpoint, relative to the base URL.
pub const GENERATE_PATH: &str = "/api/generate";

/// HTTP implementation of [`GenerateTransport`].
///
/// Issues one `POST /api/generate` per call with a JSON body and hands
/// back whatever the endpoint answered. Status interpretation belongs to
/// the caller; this client only fails when the exchange never completes.
/// No timeout is applied, so a call waits as long as the underlying
/// transport does.
#[derive(Debug, Clone)]
pub struct GenerateClient {
    client: Client,
    base_url: String,
}

impl GenerateClient {
    /// Creates a client for the endpoint the config points at.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::new();

        debug!(base_url = %config.base_url(), "Created generation client");

        Self {
            client,
            base_url: config.base_url().clone(),
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerateTransport for GenerateClient {
    #[instrument(skip(self, request), fields(topic = %request.topic()))]
    async fn post_generate(&self, request: &GenerateRequest) -> Result<TransportReply, HttpError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);

        debug!(url = %url, "Sending generation request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            HttpError::new(format!("Failed to read response body: {}", e))
        })?;

        debug!(status, bytes = body.len(), "Received response");

        Ok(TransportReply::new(status, body))
    }
}
