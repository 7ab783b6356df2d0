use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expected market impact of an economic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Classify a raw impact string, case-insensitively, by substring match
    /// in priority order high > medium > low. Anything unrecognized (or
    /// absent) is Low.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Impact::Low;
        };

        let lowered = raw.to_lowercase();
        if lowered.contains("high") {
            Impact::High
        } else if lowered.contains("medium") {
            Impact::Medium
        } else {
            Impact::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}

/// Canonical economic calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomicEvent {
    /// Upstream id when supplied, otherwise a generated opaque token.
    pub id: String,
    pub occurs_at: DateTime<Utc>,
    pub currency: String,
    pub title: String,
    pub impact: Impact,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub previous: Option<f64>,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_case_insensitive() {
        assert_eq!(Impact::parse(Some("HIGH")), Impact::High);
        assert_eq!(Impact::parse(Some("high")), Impact::High);
        assert_eq!(Impact::parse(Some("High Impact Expected")), Impact::High);
    }

    #[test]
    fn test_impact_priority_order() {
        // "high" wins even when other levels also appear
        assert_eq!(Impact::parse(Some("medium-to-high")), Impact::High);
        assert_eq!(Impact::parse(Some("Medium")), Impact::Medium);
    }

    #[test]
    fn test_impact_defaults_to_low() {
        assert_eq!(Impact::parse(None), Impact::Low);
        assert_eq!(Impact::parse(Some("")), Impact::Low);
        assert_eq!(Impact::parse(Some("holiday")), Impact::Low);
    }

    #[test]
    fn test_impact_idempotent() {
        let first = Impact::parse(Some("MEDIUM"));
        let again = Impact::parse(Some(first.as_str()));
        assert_eq!(first, again);
    }
}
