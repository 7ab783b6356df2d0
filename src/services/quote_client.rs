use crate::error::{AppError, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the per-symbol quote chart API.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(QuoteClient {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// One GET per symbol: `/v8/finance/chart/{symbol}?interval=1d&range=1d`.
    /// Symbols carry characters like `^` and `=`, so the path segment is
    /// percent-encoded.
    pub async fn fetch_chart(&self, symbol: &str) -> Result<Value> {
        let encoded: String = symbol
            .bytes()
            .map(|b| match b {
                b'^' => "%5E".to_string(),
                b'=' => "%3D".to_string(),
                other => (other as char).to_string(),
            })
            .collect();

        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range=1d",
            self.base_url, encoded
        );
        debug!(symbol = %symbol, url = %url, "Fetching quote chart");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
