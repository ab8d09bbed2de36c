//! Search command - looks up catalogue assets.

use crate::commands::{CommandContext, CommandHandler};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use heimdall_client::AssetSearch;
use std::sync::Arc;
use tracing::info;

pub struct SearchHandler {
    search: Arc<dyn AssetSearch>,
}

impl SearchHandler {
    pub const NAME: &'static str = "/mxd-search";

    pub fn new(search: Arc<dyn AssetSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl CommandHandler for SearchHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn execute(&self, ctx: &CommandContext) -> AppResult<()> {
        let query = ctx.args.trim();
        if query.is_empty() {
            return Err(AppError::command("missing search query"));
        }

        let hits = self.search.search(query).await?;
        info!(query = %query, hits = hits.len(), "Search finished");

        if hits.is_empty() {
            ctx.reply.send(format!("no results for \"{}\"", query));
            return Ok(());
        }

        let lines: Vec<String> = hits
            .iter()
            .map(|hit| ctx.reply.link(&hit.url, Some(&hit.title)))
            .collect();
        ctx.reply.send(lines);
        Ok(())
    }
}
