use crate::config::Config;
use crate::server;

pub async fn run(port_override: Option<u16>) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(port) = port_override {
        config.port = port;
    }

    println!("🚀 Starting marketpulse server on port {}", config.port);
    println!("📅 Calendar upstream: {}", config.calendar_base_url);
    println!("📈 Quotes upstream:   {}", config.quotes_base_url);
    println!("📰 News upstream:     {}", config.news_base_url);
    println!("⏱️  Upstream timeout:  {}ms", config.timeout_ms);

    if let Err(e) = server::serve(config).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
