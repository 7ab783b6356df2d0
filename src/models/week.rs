use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which week of the calendar feed to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarWeek {
    #[default]
    This,
    Next,
    Last,
}

impl CalendarWeek {
    /// Suffix of the vendor feed file for this week
    /// (`ffcal_week_{this,next,last}.xml`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarWeek::This => "this",
            CalendarWeek::Next => "next",
            CalendarWeek::Last => "last",
        }
    }
}

impl FromStr for CalendarWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "this" => Ok(CalendarWeek::This),
            "next" => Ok(CalendarWeek::Next),
            "last" => Ok(CalendarWeek::Last),
            other => Err(format!("Unknown week: '{}' (expected this|next|last)", other)),
        }
    }
}

impl fmt::Display for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_this_week() {
        assert_eq!(CalendarWeek::default(), CalendarWeek::This);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for week in [CalendarWeek::This, CalendarWeek::Next, CalendarWeek::Last] {
            assert_eq!(week.as_str().parse::<CalendarWeek>().unwrap(), week);
        }
        assert!("tomorrow".parse::<CalendarWeek>().is_err());
    }
}
