use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market categories the dashboard groups symbols by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCategory {
    Crypto,
    Forex,
    Indices,
    Commodities,
}

impl MarketCategory {
    pub fn all() -> [MarketCategory; 4] {
        [
            MarketCategory::Crypto,
            MarketCategory::Forex,
            MarketCategory::Indices,
            MarketCategory::Commodities,
        ]
    }

    /// Ticker symbols for this category, in display order.
    pub fn symbols(&self) -> &'static [&'static str] {
        match self {
            MarketCategory::Crypto => &[
                "BTC-USD", "ETH-USD", "SOL-USD", "BNB-USD", "XRP-USD", "ADA-USD", "DOGE-USD",
                "AVAX-USD",
            ],
            MarketCategory::Forex => &[
                "EURUSD=X", "GBPUSD=X", "JPY=X", "AUDUSD=X", "CADUSD=X", "CHFUSD=X", "CNYUSD=X",
                "NZDUSD=X",
            ],
            MarketCategory::Indices => &[
                "^GSPC", "^DJI", "^IXIC", "^RUT", "^FTSE", "^N225", "^HSI", "^STOXX50E",
            ],
            MarketCategory::Commodities => &[
                "GC=F", "SI=F", "CL=F", "NG=F", "ZC=F", "ZS=F", "KE=F", "HG=F",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCategory::Crypto => "crypto",
            MarketCategory::Forex => "forex",
            MarketCategory::Indices => "indices",
            MarketCategory::Commodities => "commodities",
        }
    }
}

impl FromStr for MarketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crypto" => Ok(MarketCategory::Crypto),
            "forex" => Ok(MarketCategory::Forex),
            "indices" => Ok(MarketCategory::Indices),
            "commodities" => Ok(MarketCategory::Commodities),
            other => Err(format!(
                "Unknown market category: '{}' (expected crypto|forex|indices|commodities)",
                other
            )),
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable name for a ticker symbol. Unknown symbols display as-is.
pub fn display_name(symbol: &str) -> &str {
    match symbol {
        "BTC-USD" => "Bitcoin",
        "ETH-USD" => "Ethereum",
        "SOL-USD" => "Solana",
        "BNB-USD" => "Binance Coin",
        "XRP-USD" => "Ripple",
        "ADA-USD" => "Cardano",
        "DOGE-USD" => "Dogecoin",
        "AVAX-USD" => "Avalanche",
        "EURUSD=X" => "EUR/USD",
        "GBPUSD=X" => "GBP/USD",
        "JPY=X" => "USD/JPY",
        "AUDUSD=X" => "AUD/USD",
        "CADUSD=X" => "CAD/USD",
        "CHFUSD=X" => "CHF/USD",
        "CNYUSD=X" => "CNY/USD",
        "NZDUSD=X" => "NZD/USD",
        "^GSPC" => "S&P 500",
        "^DJI" => "Dow Jones",
        "^IXIC" => "NASDAQ",
        "^RUT" => "Russell 2000",
        "^FTSE" => "FTSE 100",
        "^N225" => "Nikkei 225",
        "^HSI" => "Hang Seng",
        "^STOXX50E" => "STOXX 50",
        "GC=F" => "Gold",
        "SI=F" => "Silver",
        "CL=F" => "Crude Oil",
        "NG=F" => "Natural Gas",
        "ZC=F" => "Corn",
        "ZS=F" => "Soybeans",
        "KE=F" => "Wheat",
        "HG=F" => "Copper",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_eight_symbols() {
        for category in MarketCategory::all() {
            assert_eq!(category.symbols().len(), 8, "category {}", category);
        }
    }

    #[test]
    fn test_display_name_falls_through_to_symbol() {
        assert_eq!(display_name("BTC-USD"), "Bitcoin");
        assert_eq!(display_name("UNLISTED"), "UNLISTED");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(
            "CRYPTO".parse::<MarketCategory>().unwrap(),
            MarketCategory::Crypto
        );
        assert!("bonds".parse::<MarketCategory>().is_err());
    }
}
