//! Synthetic demo data substituted when an upstream is unreachable or
//! returns nothing usable. Structurally identical to normalizer output;
//! the presentation layer can only tell the difference through the
//! degraded flag.

use crate::constants::{sample_country_for, SAMPLE_CURRENCIES, SAMPLE_EVENT_TYPES};
use crate::models::{display_name, EconomicEvent, Impact, MarketCategory, NewsItem, Quote};
use chrono::{Duration, NaiveTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Curated demo quotes per category, used verbatim (not randomized) so the
/// demo dashboard looks the same on every load.
pub fn sample_quotes(category: MarketCategory) -> Vec<Quote> {
    let rows: &[(&str, f64, f64, u64)] = match category {
        MarketCategory::Crypto => &[
            ("BTC-USD", 43_250.0, 42_800.0, 28_450_000_000),
            ("ETH-USD", 2_310.5, 2_265.0, 12_780_000_000),
            ("SOL-USD", 98.42, 101.15, 2_340_000_000),
            ("XRP-USD", 0.6215, 0.6148, 1_890_000_000),
        ],
        MarketCategory::Forex => &[
            ("EURUSD=X", 1.0875, 1.0892, 0),
            ("GBPUSD=X", 1.2704, 1.2681, 0),
            ("JPY=X", 149.85, 150.22, 0),
            ("AUDUSD=X", 0.6582, 0.6571, 0),
        ],
        MarketCategory::Indices => &[
            ("^GSPC", 4_783.45, 4_769.83, 3_920_000_000),
            ("^DJI", 37_440.34, 37_386.22, 312_000_000),
            ("^IXIC", 15_043.97, 14_963.87, 5_110_000_000),
            ("^FTSE", 7_694.51, 7_722.55, 681_000_000),
        ],
        MarketCategory::Commodities => &[
            ("GC=F", 2_042.3, 2_035.7, 184_000),
            ("SI=F", 24.15, 24.38, 62_000),
            ("CL=F", 73.82, 72.47, 318_000),
            ("NG=F", 2.612, 2.571, 97_000),
        ],
    };

    rows.iter()
        .map(|&(symbol, price, previous_close, volume)| {
            Quote::from_prices(symbol, display_name(symbol), price, previous_close, volume)
        })
        .collect()
}

/// Randomized synthetic calendar: 2-5 events for each of the next 7 days,
/// impact/currency/title drawn from fixed sets, times between 08:00 and
/// 17:00 in 30-minute steps. Only High-impact events carry measures,
/// matching how the real feed usually looks.
pub fn sample_calendar() -> Vec<EconomicEvent> {
    let mut rng = rand::thread_rng();
    let mut events = Vec::new();
    let today = Utc::now().date_naive();
    let impacts = [Impact::High, Impact::Medium, Impact::Low];

    for day in 0..7i64 {
        let date = today + Duration::days(day);
        let count = rng.gen_range(2..=5);

        for n in 0..count {
            let impact = *impacts.choose(&mut rng).unwrap();
            let currency = *SAMPLE_CURRENCIES.choose(&mut rng).unwrap();
            let event_type = *SAMPLE_EVENT_TYPES.choose(&mut rng).unwrap();

            let hour = rng.gen_range(8..17);
            let minute = if rng.gen_bool(0.5) { 30 } else { 0 };
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

            let measure = |rng: &mut rand::rngs::ThreadRng| -> Option<f64> {
                if impact == Impact::High {
                    Some((rng.gen::<f64>() * 50.0).round() / 10.0)
                } else {
                    None
                }
            };

            events.push(EconomicEvent {
                id: format!("sample-{}-{}", day, n),
                occurs_at: date.and_time(time).and_utc(),
                currency: currency.to_string(),
                title: format!("{} {}", currency, event_type),
                impact,
                actual: measure(&mut rng),
                forecast: measure(&mut rng),
                previous: measure(&mut rng),
                country: sample_country_for(currency).to_string(),
            });
        }
    }

    events
}

/// Curated demo articles with "now minus k hours" timestamps, so freshness
/// ordering is stable across runs. Filtered by category unless "all"; a
/// filter that matches nothing returns the full set instead of an empty
/// page.
pub fn sample_news(category: &str) -> Vec<NewsItem> {
    let rows: &[(&str, &str, &str, &str)] = &[
        (
            "Bitcoin Surges Past $40,000 as Institutional Adoption Grows",
            "Major financial institutions continue to expand cryptocurrency offerings, driving prices higher amid increasing adoption.",
            "Financial Times",
            "crypto",
        ),
        (
            "Federal Reserve Holds Rates Steady, Signals Caution on Inflation",
            "The Federal Reserve maintained interest rates at current levels while acknowledging persistent inflationary pressures in the economy.",
            "Bloomberg",
            "finance",
        ),
        (
            "Tech Stocks Rally as Earnings Season Exceeds Expectations",
            "Technology companies report stronger-than-expected earnings, driving a broad rally in tech stocks across major indices.",
            "CNBC",
            "business",
        ),
        (
            "Oil Prices Volatile Amid Supply Concerns",
            "Crude oil prices swing wildly as geopolitical tensions rise and OPEC+ considers production adjustments.",
            "Reuters",
            "business",
        ),
        (
            "Euro Strengthens Against Dollar as ECB Hints at Policy Shift",
            "The European Central Bank signals a more hawkish stance, boosting the euro against major currencies.",
            "Financial Times",
            "finance",
        ),
        (
            "New AI Trading Platform Promises Revolution in Algorithmic Trading",
            "A startup unveils a new artificial intelligence platform that claims to predict market movements with unprecedented accuracy.",
            "TechCrunch",
            "technology",
        ),
        (
            "Housing Market Shows Signs of Cooling After Record Year",
            "After unprecedented growth, housing market indicators suggest a return to more normal patterns.",
            "Bloomberg",
            "economics",
        ),
        (
            "Central Banks Explore Digital Currencies as Crypto Adoption Grows",
            "Major central banks worldwide are accelerating research into central bank digital currencies as adoption continues to expand.",
            "Wall Street Journal",
            "crypto",
        ),
    ];

    let now = Utc::now();
    let all: Vec<NewsItem> = rows
        .iter()
        .enumerate()
        .map(|(k, &(title, description, source, article_category))| NewsItem {
            title: title.to_string(),
            description: description.to_string(),
            url: "#".to_string(),
            image_url: crate::constants::PLACEHOLDER_IMAGE_URL.to_string(),
            published_at: now - Duration::hours(2 * (k as i64 + 1)),
            source_name: source.to_string(),
            category: article_category.to_string(),
        })
        .collect();

    if category == "all" {
        return all;
    }

    let filtered: Vec<NewsItem> = all
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect();

    if filtered.is_empty() {
        all
    } else {
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_sample_quotes_hold_quote_invariants() {
        for category in MarketCategory::all() {
            let quotes = sample_quotes(category);
            assert!(!quotes.is_empty());
            for q in quotes {
                assert_eq!(q.change, q.price - q.previous_close);
                assert!(q.change_percent.is_finite());
                assert!(!q.degraded);
                assert!(!q.display_name.is_empty());
            }
        }
    }

    #[test]
    fn test_sample_calendar_shape() {
        let events = sample_calendar();
        // 7 days x 2..=5 events per day
        assert!(events.len() >= 14 && events.len() <= 35);

        for event in &events {
            assert!(event.id.starts_with("sample-"));
            assert!(!event.currency.is_empty());
            assert!((8..17).contains(&event.occurs_at.hour()));
            assert!(event.occurs_at.minute() == 0 || event.occurs_at.minute() == 30);
            if event.impact != Impact::High {
                assert!(event.actual.is_none());
            }
        }
    }

    #[test]
    fn test_sample_news_freshness_ordering() {
        let articles = sample_news("all");
        assert_eq!(articles.len(), 8);
        for pair in articles.windows(2) {
            assert!(pair[0].published_at > pair[1].published_at);
        }
    }

    #[test]
    fn test_sample_news_category_filter() {
        let crypto = sample_news("crypto");
        assert!(crypto.iter().all(|a| a.category == "crypto"));
        assert!(!crypto.is_empty());

        // unknown category returns the full set rather than nothing
        let unknown = sample_news("sports");
        assert_eq!(unknown.len(), 8);
    }
}
