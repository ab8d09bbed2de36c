//! Heimdall HTTP client.

use crate::error::HeimdallError;
use crate::types::{SearchHit, SearchResponse};
use crate::AssetSearch;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument};

/// Heimdall asset search client.
#[derive(Clone)]
pub struct HeimdallClient {
    client: Client,
    base_url: String,
    store_url: String,
    api_key: SecretString,
    app_id: String,
    page_size: usize,
}

impl HeimdallClient {
    /// Create a new Heimdall client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: SecretString,
        app_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, HeimdallError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store_url: "https://www.maxdome.de".into(),
            api_key,
            app_id: app_id.into(),
            page_size: 3,
        })
    }

    /// Set the number of results per search.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Set the base URL asset links are built from.
    pub fn with_store_url(mut self, store_url: impl Into<String>) -> Self {
        self.store_url = store_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Build the public link for an asset id.
    pub fn asset_url(&self, id: &str) -> String {
        format!("{}/{}", self.store_url, id)
    }
}

#[async_trait]
impl AssetSearch for HeimdallClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, HeimdallError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(HeimdallError::InvalidQuery("empty query".into()));
        }

        let response = self
            .client
            .get(format!("{}/api/v1/assets", self.base_url))
            .header("apikey", self.api_key.expose_secret())
            .header("appid", &self.app_id)
            .header("Accept", "application/json")
            .query(&[
                ("filter[]", format!("search~{}", query)),
                ("pageSize", self.page_size.to_string()),
                ("pageStart", "1".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(HeimdallError::Api { status, message });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!(hits = parsed.asset_list.len(), "Search completed");

        Ok(parsed
            .asset_list
            .into_iter()
            .take(self.page_size)
            .map(|asset| SearchHit {
                url: self.asset_url(&asset.id),
                title: asset.title,
            })
            .collect())
    }
}
