use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::FetchConfig;
use crate::error::ScaleError;

/// Downloads recipe pages.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScaleError> {
        Self::with_config(&FetchConfig::default(), timeout)
    }

    /// Builds a fetcher from configuration. An explicit `timeout` overrides
    /// the configured one.
    pub fn with_config(config: &FetchConfig, timeout: Option<Duration>) -> Result<Self, ScaleError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(config.timeout));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, ScaleError> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
