//! Info command - describes the bot and its commands.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::AppResult;
use async_trait::async_trait;

pub struct InfoHandler {
    commands: Vec<String>,
}

impl InfoHandler {
    pub const NAME: &'static str = "/mxd-info";

    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl CommandHandler for InfoHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn execute(&self, ctx: &CommandContext) -> AppResult<()> {
        ctx.reply.send(vec![
            format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            format!("commands: {}", self.commands.join(", ")),
            ctx.reply.link(env!("CARGO_PKG_REPOSITORY"), Some("source")),
        ]);
        Ok(())
    }
}
