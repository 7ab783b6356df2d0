//! Fixed vocabularies and sentinels shared by the normalizers and the
//! fallback generator.

/// Substituted when an article carries no usable image URL.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1?auto=format&fit=crop&w=500&q=80";

/// Substituted when an article carries no source name.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Prefix for ids synthesized when a calendar record arrives without one.
pub const GENERATED_ID_PREFIX: &str = "event-";

/// Currencies the synthetic calendar draws from.
pub const SAMPLE_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "NZD", "CHF"];

/// Event titles the synthetic calendar draws from.
pub const SAMPLE_EVENT_TYPES: &[&str] = &[
    "Interest Rate Decision",
    "GDP",
    "CPI",
    "Employment Change",
    "Retail Sales",
    "PMI",
    "Trade Balance",
    "Central Bank Speech",
];

/// Country code for a synthetic event, keyed by its currency.
pub fn sample_country_for(currency: &str) -> &'static str {
    match currency {
        "USD" => "US",
        "EUR" => "EU",
        "GBP" => "UK",
        "JPY" => "JP",
        "CAD" => "CA",
        "AUD" => "AU",
        "NZD" => "NZ",
        _ => "CH",
    }
}

/// Default upstream endpoints, overridable via environment (see `config`).
pub const DEFAULT_CALENDAR_BASE_URL: &str = "https://www.forexfactory.com";
pub const DEFAULT_QUOTES_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org";

/// Default bound on any single outbound call. The upstreams have no SLA;
/// one slow vendor must not stall the whole aggregation.
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

pub const DEFAULT_PORT: u16 = 3001;
