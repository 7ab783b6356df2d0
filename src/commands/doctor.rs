use crate::config::Config;
use crate::models::{CalendarWeek, MarketCategory};
use crate::services::{CalendarClient, NewsClient, QuoteClient};

/// Probe each upstream once and report what works. Useful before blaming
/// the aggregator for serving demo data.
pub async fn run() {
    println!("🩺 marketpulse doctor");
    println!("=====================");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let timeout = config.upstream_timeout();

    print!("📅 Calendar ({}) ... ", config.calendar_base_url);
    match CalendarClient::new(&config.calendar_base_url, timeout) {
        Ok(client) => match client.fetch_week(CalendarWeek::This).await {
            Ok(body) => println!("✅ ok ({} bytes)", body.len()),
            Err(e) => println!("❌ {}", e),
        },
        Err(e) => println!("❌ {}", e),
    }

    let probe_symbol = MarketCategory::Crypto.symbols()[0];
    print!("📈 Quotes ({}, {}) ... ", config.quotes_base_url, probe_symbol);
    match QuoteClient::new(&config.quotes_base_url, timeout) {
        Ok(client) => match client.fetch_chart(probe_symbol).await {
            Ok(_) => println!("✅ ok"),
            Err(e) => println!("❌ {}", e),
        },
        Err(e) => println!("❌ {}", e),
    }

    print!("📰 News ({}) ... ", config.news_base_url);
    match NewsClient::new(&config.news_base_url, &config.news_api_key, timeout) {
        Ok(client) => match client.fetch_headlines("business").await {
            Ok(_) => println!("✅ ok"),
            Err(e) => println!("❌ {}", e),
        },
        Err(e) => println!("❌ {}", e),
    }

    println!("=====================");
    println!("Done. Failing upstreams degrade to demo data at runtime.");
}
