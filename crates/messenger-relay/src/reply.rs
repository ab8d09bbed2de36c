//! Per-event reply channel handed to command handlers.

use async_trait::async_trait;
use messenger_client::{MessengerClient, MessengerError};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Outbound delivery of a text message to a user.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError>;
}

#[async_trait]
impl MessageSender for MessengerClient {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), MessengerError> {
        MessengerClient::send_text(self, recipient_id, text).await
    }
}

/// Text accepted by [`ReplyChannel::send`]. Sequences are joined with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyText(String);

impl ReplyText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReplyText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ReplyText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<Vec<String>> for ReplyText {
    fn from(lines: Vec<String>) -> Self {
        Self(lines.join("\n"))
    }
}

impl From<Vec<&str>> for ReplyText {
    fn from(lines: Vec<&str>) -> Self {
        Self(lines.join("\n"))
    }
}

impl<const N: usize> From<[&str; N]> for ReplyText {
    fn from(lines: [&str; N]) -> Self {
        Self(lines.join("\n"))
    }
}

/// Format a link for chat: `label (url)`, or the bare url without a label.
pub fn format_link(url: &str, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{} ({})", label, url),
        _ => url.to_string(),
    }
}

/// Reply handle bound to the sender of one messaging event.
///
/// Sends go through a queue drained by one background task per channel, so a
/// user receives the replies of one event in the order they were sent.
#[derive(Clone)]
pub struct ReplyChannel {
    recipient_id: String,
    queue: mpsc::UnboundedSender<String>,
}

impl ReplyChannel {
    pub fn new(recipient_id: impl Into<String>, sender: Arc<dyn MessageSender>) -> Self {
        let recipient_id = recipient_id.into();
        let (queue, mut rx) = mpsc::unbounded_channel::<String>();

        let recipient = recipient_id.clone();
        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                match sender.send_text(&recipient, &text).await {
                    Ok(()) => debug!(recipient = %recipient, "Reply sent"),
                    Err(e) => error!(recipient = %recipient, "Failed to send reply: {}", e),
                }
            }
        });

        Self {
            recipient_id,
            queue,
        }
    }

    /// The user replies are delivered to.
    pub fn recipient_id(&self) -> &str {
        &self.recipient_id
    }

    /// Queue one message for delivery. Delivery failures are logged only.
    pub fn send(&self, text: impl Into<ReplyText>) {
        if self.queue.send(text.into().0).is_err() {
            error!(recipient = %self.recipient_id, "Reply queue closed; message dropped");
        }
    }

    /// See [`format_link`].
    pub fn link(&self, url: &str, label: Option<&str>) -> String {
        format_link(url, label)
    }
}
