use crate::error::{AppError, Result};
use crate::models::CalendarWeek;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Browser-like User-Agent; the calendar vendor rejects bare HTTP clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Client for the economic-calendar XML feed.
#[derive(Debug, Clone)]
pub struct CalendarClient {
    client: reqwest::Client,
    base_url: String,
}

impl CalendarClient {
    /// Build a client with a bounded per-request timeout. The feed host has
    /// no SLA; an unbounded wait here would stall the whole aggregation.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(CalendarClient {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch the raw XML body for one week of the calendar
    /// (`ffcal_week_{this,next,last}.xml`).
    pub async fn fetch_week(&self, week: CalendarWeek) -> Result<String> {
        let url = format!("{}/ffcal_week_{}.xml", self.base_url, week.as_str());
        debug!(url = %url, "Fetching calendar feed");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/xml, text/xml, */*")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Referer", format!("{}/", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        info!(week = %week, bytes = body.len(), "Fetched calendar feed");
        Ok(body)
    }

    /// Pass-through fetch of an event detail page, translated to JSON.
    pub async fn fetch_event(&self, event_id: &str) -> Result<Value> {
        self.fetch_translated(&format!("{}/event/{}", self.base_url, event_id))
            .await
    }

    /// Pass-through fetch of an event's history, translated to JSON.
    pub async fn fetch_history(&self, event_id: &str) -> Result<Value> {
        self.fetch_translated(&format!("{}/history/{}", self.base_url, event_id))
            .await
    }

    async fn fetch_translated(&self, url: &str) -> Result<Value> {
        debug!(url = %url, "Fetching pass-through document");

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/xml, text/xml, */*")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Referer", format!("{}/", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        translate_body(&response.text().await?)
    }
}

/// The vendor serves XML on its detail routes, so the body is run through
/// the XML deserializer first (attributes keyed `@name`, element text
/// `$text`, all values as strings) and re-served as JSON. A body that is
/// already JSON passes through unchanged.
fn translate_body(body: &str) -> Result<Value> {
    match quick_xml::de::from_str::<Value>(body) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str::<Value>(body).map_err(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_body_translates_to_json() {
        let body = r#"
            <eventdetail id="evt-42">
                <title>Retail Sales</title>
                <history>
                    <entry date="10/21/2025"><actual>0.3%</actual></entry>
                    <entry date="09/21/2025"><actual>0.1%</actual></entry>
                </history>
            </eventdetail>"#;

        let value = translate_body(body).unwrap();
        assert_eq!(value["@id"], "evt-42");
        assert_eq!(value["title"], "Retail Sales");
        assert_eq!(value["history"]["entry"][0]["@date"], "10/21/2025");
        assert_eq!(value["history"]["entry"][1]["actual"], "0.1%");
    }

    #[test]
    fn test_json_body_passes_through() {
        let value = translate_body(r#"{"id": "evt-42", "entries": [1, 2]}"#).unwrap();
        assert_eq!(value["id"], "evt-42");
        assert_eq!(value["entries"][1], 2);
    }

    #[test]
    fn test_garbage_body_is_parse_error() {
        assert!(translate_body("not xml and not json").is_err());
    }
}
