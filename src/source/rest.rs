use crate::models::PropertyRecord;
use crate::source::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Listing source backed by the hosted data store's REST endpoint.
pub struct RestSource {
    client: Client,
    base_url: String,
    table: String,
    api_key: Option<String>,
}

impl RestSource {
    /// Create a source against the store's default listings table.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_table(base_url, "all_tasks")
    }

    /// Create a source reading a specific table.
    pub fn with_table(base_url: impl Into<String>, table: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("estate-search/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            table: table.into(),
            api_key: None,
        })
    }

    /// Attach the store's api key, sent as both `apikey` and bearer token.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl ListingSource for RestSource {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>> {
        let url = format!("{}/rest/v1/{}?select=*", self.base_url, self.table);

        debug!("Fetching URL: {}", url);

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .await
            .context("Failed to fetch listing collection")?;

        if !response.status().is_success() {
            warn!("Store returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let records: Vec<PropertyRecord> = response
            .json()
            .await
            .context("Failed to decode listing collection")?;

        info!("Fetched {} listings from {}", records.len(), self.table);

        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        "rest"
    }
}
