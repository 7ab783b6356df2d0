use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical news article.
///
/// Every field is total: `image_url` always holds a usable URL (placeholder
/// substituted when the provider sent none) and `source_name` falls back to
/// a sentinel rather than being absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
    pub published_at: DateTime<Utc>,
    pub source_name: String,
    pub category: String,
}
