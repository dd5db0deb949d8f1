use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::ScrapeError;

/// HTTP client for transfermarkt.com pages.
pub struct TransfermarktClient {
    client: Client,
    base_url: String,
}

impl TransfermarktClient {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw HTML of a player's transfers page.
    /// HTTP 404 maps to `NotFound`; any other non-success status to `Upstream`.
    /// Transport failures propagate unmodified.
    pub async fn player_transfers_page(&self, player_id: &str) -> Result<String, ScrapeError> {
        let url = format!("{}/-/transfers/spieler/{}", self.base_url, player_id);
        tracing::debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound(player_id.to_string()));
        }
        if !resp.status().is_success() {
            return Err(ScrapeError::Upstream(resp.status()));
        }

        Ok(resp.text().await?)
    }
}
