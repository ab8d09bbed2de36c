//! Messenger Send API client.

use crate::error::MessengerError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Messenger Platform Send API client.
#[derive(Clone)]
pub struct MessengerClient {
    client: Client,
    graph_url: String,
    page_access_token: SecretString,
}

impl MessengerClient {
    /// Create a new Messenger client.
    pub fn new(
        graph_url: impl Into<String>,
        page_access_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, MessengerError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            graph_url: graph_url.into().trim_end_matches('/').to_string(),
            page_access_token,
        })
    }

    /// Get the configured Graph API base URL.
    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    /// Post a request to the Send API.
    #[instrument(skip(self, request), fields(recipient = %request.recipient.id))]
    pub async fn send(
        &self,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, MessengerError> {
        let response = self
            .client
            .post(format!("{}/me/messages", self.graph_url))
            .query(&[("access_token", self.page_access_token.expose_secret())])
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let msg = response.text().await.unwrap_or_default();
            warn!(%status, "Send failed: {}", msg);
            return Err(MessengerError::SendFailed(msg));
        }

        let body = response.text().await?;
        let parsed: SendMessageResponse = serde_json::from_str(&body)?;
        debug!(message_id = ?parsed.message_id, "Message delivered");
        Ok(parsed)
    }

    /// Send a plain text message to a recipient.
    pub async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError> {
        self.send(&SendMessageRequest::text(recipient_id, text))
            .await
            .map(|_| ())
    }
}
