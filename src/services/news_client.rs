use crate::error::{AppError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the news headlines API.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(NewsClient {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// GET `/v2/top-headlines?category={category}&apiKey={key}`.
    /// `all` maps to no category filter.
    pub async fn fetch_headlines(&self, category: &str) -> Result<Value> {
        let url = format!("{}/v2/top-headlines", self.base_url);
        let mut query: Vec<(&str, &str)> = vec![("apiKey", self.api_key.as_str())];
        if category != "all" {
            query.push(("category", category));
        }

        debug!(category = %category, "Fetching news headlines");

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
