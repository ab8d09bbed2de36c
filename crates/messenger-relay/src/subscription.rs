//! Subscription handshake for `GET /webhook`.

use crate::error::RelayError;
use serde::Deserialize;
use tracing::{info, warn};

/// Mode sent by the platform when subscribing a webhook.
pub const SUBSCRIBE_MODE: &str = "subscribe";

/// Query parameters of the verification request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscriptionParams {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

impl SubscriptionParams {
    /// Check the handshake and return the challenge to echo back.
    pub fn verify(&self, validation_token: &str) -> Result<String, RelayError> {
        let mode_ok = self.mode.as_deref() == Some(SUBSCRIBE_MODE);
        let token_ok = self.verify_token.as_deref() == Some(validation_token);

        if mode_ok && token_ok {
            info!("Webhook subscription validated");
            Ok(self.challenge.clone().unwrap_or_default())
        } else {
            warn!(mode = ?self.mode, "Webhook subscription rejected");
            Err(RelayError::VerificationFailed)
        }
    }
}
