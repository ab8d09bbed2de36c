//! Webhook event dispatch: parse, look up, invoke, reply.

use crate::commands::CommandContext;
use crate::error::AppError;
use crate::parser::MessageParser;
use crate::registry::CommandRegistry;
use crate::reply::{MessageSender, ReplyChannel};
use messenger_client::{MessagingEvent, WebhookPayload};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a single messaging event ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// No message text; nothing was sent.
    Skipped,
    /// No handler for the command name.
    Unknown(String),
    /// Handler finished normally.
    Handled(String),
    /// Handler failed; the user got the error text.
    Errored { command: String, message: String },
}

/// Reply text for an unregistered command.
pub fn unknown_command_text(command_name: &str) -> String {
    format!("unknown command \"{}\"", command_name)
}

/// Reply text for a failed handler.
pub fn error_text(err: &AppError) -> String {
    format!("error: \"{}\"", err)
}

/// Routes webhook events to command handlers.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    parser: MessageParser,
    sender: Arc<dyn MessageSender>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<CommandRegistry>,
        parser: MessageParser,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            registry,
            parser,
            sender,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handle every messaging event of a payload in order.
    ///
    /// Each handler finishes before the next event starts. Replies are sent in
    /// the background and may still be in flight when this returns.
    pub async fn dispatch(&self, payload: &WebhookPayload) -> Vec<EventOutcome> {
        if !payload.is_page() {
            debug!(object = %payload.object, "Ignoring non-page payload");
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for event in payload.messaging_events() {
            outcomes.push(self.handle_event(&event).await);
        }
        outcomes
    }

    /// Handle one messaging event.
    pub async fn handle_event(&self, event: &MessagingEvent) -> EventOutcome {
        let Some(text) = event.text() else {
            debug!(sender = %event.sender.id, "Skipping event without message text");
            return EventOutcome::Skipped;
        };

        let reply = ReplyChannel::new(event.sender.id.clone(), Arc::clone(&self.sender));
        let (command_name, args) = match self.parser.parse(text) {
            Some(parsed) => (parsed.command_name, parsed.args),
            None => (String::new(), String::new()),
        };

        let Some(handler) = self.registry.get(&command_name) else {
            info!(sender = %event.sender.id, command = %command_name, "Unknown command");
            reply.send(unknown_command_text(&command_name));
            return EventOutcome::Unknown(command_name);
        };

        info!(sender = %event.sender.id, command = %command_name, "Dispatching command");
        let ctx = CommandContext { args, reply };

        match handler.execute(&ctx).await {
            Ok(()) => EventOutcome::Handled(command_name),
            Err(e) => {
                warn!(command = %command_name, "Handler error: {}", e);
                ctx.reply.send(error_text(&e));
                EventOutcome::Errored {
                    command: command_name,
                    message: e.to_string(),
                }
            }
        }
    }
}
