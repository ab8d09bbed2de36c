//! Messenger webhook relay.
//!
//! Receives page webhooks from the Messenger Platform, verifies their
//! signature, turns `/command args` messages into handler calls and sends the
//! handler's replies back through the Send API.

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod parser;
pub mod registry;
pub mod reply;
pub mod signature;
pub mod subscription;

pub use config::Config;
pub use dispatcher::{Dispatcher, EventOutcome};
pub use error::{AppError, AppResult, RelayError};
pub use parser::{MessageParser, ParsedCommand};
pub use registry::CommandRegistry;
pub use reply::{MessageSender, ReplyChannel};
