//! Heimdall asset search client.

mod client;
mod error;
mod types;

pub use client::HeimdallClient;
pub use error::HeimdallError;
pub use types::*;

use async_trait::async_trait;

/// Anything that can answer a free-text asset search.
#[async_trait]
pub trait AssetSearch: Send + Sync {
    /// Search for assets matching `query`.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, HeimdallError>;
}
