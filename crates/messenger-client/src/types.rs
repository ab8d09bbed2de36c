//! Messenger Platform types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Object type carried by page subscriptions.
pub const PAGE_OBJECT: &str = "page";

/// Metadata attached to every outgoing message.
pub const DEVELOPER_METADATA: &str = "DEVELOPER_DEFINED_METADATA";

/// Inbound webhook payload.
///
/// Both fields stay raw JSON so that payloads of other subscription types,
/// whatever their shape, can be ignored instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub object: serde_json::Value,
    #[serde(default)]
    pub entry: serde_json::Value,
}

impl WebhookPayload {
    /// Whether this payload belongs to a page subscription.
    pub fn is_page(&self) -> bool {
        self.object.as_str() == Some(PAGE_OBJECT)
    }

    /// Decode every messaging event across all entries, in order.
    ///
    /// Events that do not decode are logged and skipped; the rest of the
    /// batch is kept.
    pub fn messaging_events(&self) -> Vec<MessagingEvent> {
        let Some(entries) = self.entry.as_array() else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| entry.get("messaging")?.as_array())
            .flatten()
            .filter_map(|raw| match MessagingEvent::deserialize(raw) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!("Skipping malformed messaging event: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// A single messaging event inside an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingEvent {
    pub sender: Participant,
    pub recipient: Option<Participant>,
    pub timestamp: Option<i64>,
    pub message: Option<IncomingMessage>,
}

impl MessagingEvent {
    /// Text of the message, if this event carries one.
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref()?.text.as_deref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub mid: Option<String>,
    pub text: Option<String>,
}

/// Outgoing Send API request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub recipient: Participant,
    pub message: OutgoingMessage,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub metadata: String,
}

impl SendMessageRequest {
    /// Build a text message for a recipient.
    pub fn text(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: Participant {
                id: recipient_id.into(),
            },
            message: OutgoingMessage {
                text: text.into(),
                metadata: DEVELOPER_METADATA.to_string(),
            },
        }
    }
}

/// Send API response.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageResponse {
    pub recipient_id: Option<String>,
    pub message_id: Option<String>,
}
