//! Messenger Platform client: webhook payload types and the Send API.

mod client;
mod error;
mod types;

pub use client::MessengerClient;
pub use error::MessengerError;
pub use types::*;
