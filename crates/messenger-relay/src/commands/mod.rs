//! Bot command handlers.

mod info;
mod search;

pub use info::InfoHandler;
pub use search::SearchHandler;

use crate::error::AppResult;
use crate::registry::CommandRegistry;
use crate::reply::ReplyChannel;
use async_trait::async_trait;
use heimdall_client::AssetSearch;
use std::sync::Arc;

/// What a handler gets for one invocation.
pub struct CommandContext {
    /// Raw text after the command name.
    pub args: String,
    /// Channel back to the user who sent the command.
    pub reply: ReplyChannel,
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name including the marker (e.g., "/mxd-info").
    fn name(&self) -> &str;

    /// Execute the command. An error is shown to the user as `error: "<message>"`.
    async fn execute(&self, ctx: &CommandContext) -> AppResult<()>;
}

/// Registry with the built-in commands.
pub fn default_registry(search: Arc<dyn AssetSearch>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(InfoHandler::new(vec![
        InfoHandler::NAME.to_string(),
        SearchHandler::NAME.to_string(),
    ])));
    registry.register(Arc::new(SearchHandler::new(search)));
    registry
}
