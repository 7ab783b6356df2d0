use crate::constants::{PLACEHOLDER_IMAGE_URL, UNKNOWN_SOURCE};
use crate::models::NewsItem;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Provider responses come either as a bare article array or wrapped in an
/// `articles` field. Both shapes are accepted at the boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NewsPayload {
    Articles(Vec<Value>),
    Wrapped { articles: Vec<Value> },
}

impl NewsPayload {
    pub fn into_articles(self) -> Vec<Value> {
        match self {
            NewsPayload::Articles(articles) => articles,
            NewsPayload::Wrapped { articles } => articles,
        }
    }
}

/// Normalize provider articles into canonical news items.
///
/// Field names differ per provider, so each output field coalesces over an
/// ordered candidate list (first non-empty wins). Missing fields have safe
/// defaults, so unlike the calendar normalizer no record is ever dropped:
/// output cardinality equals input cardinality.
pub fn normalize_news(articles: &[Value], requested_category: &str) -> Vec<NewsItem> {
    articles
        .iter()
        .map(|article| normalize_article(article, requested_category))
        .collect()
}

fn normalize_article(article: &Value, requested_category: &str) -> NewsItem {
    NewsItem {
        title: first_str(article, &["title", "headline"])
            .unwrap_or("Untitled")
            .to_string(),
        description: first_str(article, &["description", "summary", "content"])
            .unwrap_or("")
            .to_string(),
        url: first_str(article, &["url", "link"]).unwrap_or("#").to_string(),
        image_url: first_str(article, &["urlToImage", "image_url", "image"])
            .unwrap_or(PLACEHOLDER_IMAGE_URL)
            .to_string(),
        published_at: parse_published_at(article),
        source_name: source_name(article),
        category: first_str(article, &["category"])
            .unwrap_or(requested_category)
            .to_string(),
    }
}

/// First non-empty string among the candidate fields.
fn first_str<'a>(article: &'a Value, candidates: &[&str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|key| article.get(key).and_then(|v| v.as_str()))
        .find(|s| !s.trim().is_empty())
}

/// Publication timestamp: `publishedAt` then `pubDate` then `published_at`.
/// RFC 3339 first, then RFC 2822 (the usual `pubDate` form). Unparseable or
/// absent resolves to now so freshness sorting still works.
fn parse_published_at(article: &Value) -> DateTime<Utc> {
    first_str(article, &["publishedAt", "pubDate", "published_at"])
        .and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .or_else(|_| DateTime::parse_from_rfc2822(raw))
                .ok()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// Source is either an object (`source.name`, NewsAPI style) or a bare
/// string. Neither present means the sentinel.
fn source_name(article: &Value) -> String {
    if let Some(name) = article
        .get("source")
        .and_then(|s| s.get("name"))
        .and_then(|n| n.as_str())
        .filter(|s| !s.trim().is_empty())
    {
        return name.to_string();
    }
    if let Some(name) = article
        .get("source")
        .and_then(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
    {
        return name.to_string();
    }
    first_str(article, &["source_name"])
        .unwrap_or(UNKNOWN_SOURCE)
        .to_string()
}
