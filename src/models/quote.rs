use serde::{Deserialize, Serialize};

/// Canonical market quote, independent of the vendor schema.
///
/// `change` and `change_percent` are derived, never taken from upstream.
/// A zero previous close would make the percent undefined; such records
/// carry `change_percent = 0` and are flagged degraded instead of ever
/// holding a NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub display_name: String,
    pub price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    #[serde(default)]
    pub degraded: bool,
}

impl Quote {
    /// Build a quote from raw prices, computing the derived fields.
    pub fn from_prices(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        price: f64,
        previous_close: f64,
        volume: u64,
    ) -> Self {
        let change = price - previous_close;
        let (change_percent, degraded) = if previous_close != 0.0 {
            (change / previous_close * 100.0, false)
        } else {
            (0.0, true)
        };

        Quote {
            symbol: symbol.into(),
            display_name: display_name.into(),
            price,
            previous_close,
            change,
            change_percent,
            volume,
            degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_percent_exact() {
        let q = Quote::from_prices("BTC-USD", "Bitcoin", 105.0, 100.0, 42);
        assert_eq!(q.change, 5.0);
        assert_eq!(q.change_percent, 5.0 / 100.0 * 100.0);
        assert!(!q.degraded);
    }

    #[test]
    fn test_zero_previous_close_is_degraded_not_nan() {
        let q = Quote::from_prices("XYZ", "XYZ", 10.0, 0.0, 0);
        assert_eq!(q.change_percent, 0.0);
        assert!(q.degraded);
        assert!(q.change_percent.is_finite());
    }

    #[test]
    fn test_negative_change() {
        let q = Quote::from_prices("ETH-USD", "Ethereum", 90.0, 100.0, 7);
        assert_eq!(q.change, -10.0);
        assert_eq!(q.change_percent, -10.0);
    }
}
