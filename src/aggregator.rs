//! Presentation-facing aggregation facade.
//!
//! Every domain accessor follows the same contract: fetch, normalize, and
//! fall back to synthetic data when the fetch fails or the normalized
//! result is empty. Upstream failure is never surfaced to the caller as an
//! error, only as a degraded flag on the data.

use crate::config::{Config, DegradedQuotePolicy};
use crate::error::Result;
use crate::fallback;
use crate::models::{CalendarWeek, EconomicEvent, MarketCategory, NewsItem, Quote};
use crate::normalize::{normalize_calendar, normalize_news, normalize_quote_batch, parse_feed, NewsPayload};
use crate::services::{CalendarClient, NewsClient, QuoteClient};
use futures::future::join_all;
use tracing::{info, warn};

/// Data plus the signal that it was produced under fallback or defensive
/// defaults. Structurally, degraded data is indistinguishable from live
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub degraded: bool,
}

impl<T> Sourced<T> {
    fn live(data: T) -> Self {
        Sourced {
            data,
            degraded: false,
        }
    }

    fn fallback(data: T) -> Self {
        Sourced {
            data,
            degraded: true,
        }
    }
}

pub struct Aggregator {
    calendar: CalendarClient,
    quotes: QuoteClient,
    news: NewsClient,
    degraded_quotes: DegradedQuotePolicy,
}

impl Aggregator {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = config.upstream_timeout();
        Ok(Aggregator {
            calendar: CalendarClient::new(&config.calendar_base_url, timeout)?,
            quotes: QuoteClient::new(&config.quotes_base_url, timeout)?,
            news: NewsClient::new(&config.news_base_url, &config.news_api_key, timeout)?,
            degraded_quotes: config.degraded_quotes,
        })
    }

    /// Quotes for every symbol in the category, fetched concurrently.
    ///
    /// Symbols whose fetch or parse fails are dropped (partial success);
    /// reassembly preserves catalog order because the join collects results
    /// positionally. An entirely empty batch degrades to the curated demo
    /// set.
    pub async fn get_quotes(&self, category: MarketCategory) -> Sourced<Vec<Quote>> {
        let symbols = category.symbols();
        let fetches = symbols.iter().map(|symbol| self.quotes.fetch_chart(symbol));
        let results = join_all(fetches).await;

        let fetched = symbols
            .iter()
            .map(|s| s.to_string())
            .zip(results)
            .collect::<Vec<_>>();

        let mut quotes = normalize_quote_batch(fetched);
        if self.degraded_quotes == DegradedQuotePolicy::Hide {
            quotes.retain(|q| !q.degraded);
        }

        info!(
            category = %category,
            requested = symbols.len(),
            returned = quotes.len(),
            "Assembled quote batch"
        );

        resolve(category.as_str(), Ok(quotes), || fallback::sample_quotes(category))
    }

    /// One week of the economic calendar.
    pub async fn get_calendar(&self, week: CalendarWeek) -> Sourced<Vec<EconomicEvent>> {
        let normalized = match self.calendar.fetch_week(week).await {
            Ok(xml) => parse_feed(&xml).map(|raw| {
                let (events, skipped) = normalize_calendar(&raw);
                if !skipped.is_empty() {
                    warn!(
                        week = %week,
                        skipped = skipped.len(),
                        "Skipped unparseable calendar records"
                    );
                }
                events
            }),
            Err(e) => Err(e),
        };

        resolve("calendar", normalized, fallback::sample_calendar)
    }

    /// Headlines for a news category (`all` for everything).
    pub async fn get_news(&self, category: &str) -> Sourced<Vec<NewsItem>> {
        let normalized = match self.news.fetch_headlines(category).await {
            Ok(payload) => serde_json::from_value::<NewsPayload>(payload)
                .map(|p| normalize_news(&p.into_articles(), category))
                .map_err(Into::into),
            Err(e) => Err(e),
        };

        resolve("news", normalized, || fallback::sample_news(category))
    }
}

/// The one behavioral contract shared by all three domains: a fetch/parse
/// failure or an empty normalized batch yields fallback data marked
/// degraded; anything else passes through untouched.
fn resolve<T>(
    domain: &str,
    normalized: Result<Vec<T>>,
    fallback: impl FnOnce() -> Vec<T>,
) -> Sourced<Vec<T>> {
    match normalized {
        Ok(records) if !records.is_empty() => Sourced::live(records),
        Ok(_) => {
            warn!(domain, "Upstream returned no usable records, serving fallback data");
            Sourced::fallback(fallback())
        }
        Err(e) => {
            warn!(
                domain,
                transport = e.is_transport(),
                error = %e,
                "Upstream failed, serving fallback data"
            );
            Sourced::fallback(fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_resolve_passes_live_data_through() {
        let sourced = resolve("test", Ok(vec![1, 2, 3]), Vec::new);
        assert!(!sourced.degraded);
        assert_eq!(sourced.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_resolve_falls_back_on_empty() {
        let sourced = resolve("test", Ok(Vec::<i32>::new()), || vec![9]);
        assert!(sourced.degraded);
        assert_eq!(sourced.data, vec![9]);
    }

    #[test]
    fn test_resolve_falls_back_on_error_never_throws() {
        let sourced = resolve(
            "test",
            Err(AppError::Network("connection reset".to_string())),
            || vec![7],
        );
        assert!(sourced.degraded);
        assert_eq!(sourced.data, vec![7]);
    }

    #[test]
    fn test_empty_calendar_degrades_to_week_of_synthetic_events() {
        let sourced = resolve("calendar", Ok(Vec::new()), fallback::sample_calendar);
        assert!(sourced.degraded);
        assert!(sourced.data.len() >= 14 && sourced.data.len() <= 35);
    }

    #[test]
    fn test_quote_fallback_type_matches_normalizer_output() {
        let sourced = resolve(
            "crypto",
            Err(AppError::UpstreamStatus(503)),
            || fallback::sample_quotes(MarketCategory::Crypto),
        );
        assert!(sourced.degraded);
        for quote in &sourced.data {
            assert!(!quote.symbol.is_empty());
            assert!(quote.change_percent.is_finite());
        }
    }
}
