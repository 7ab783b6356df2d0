use crate::constants::GENERATED_ID_PREFIX;
use crate::error::{AppError, Result};
use crate::models::{EconomicEvent, Impact};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Raw calendar feed as the vendor ships it: a `<weeklyevents>` batch of
/// `<event>` elements, attributes on the element and child elements for the
/// textual fields. A week with a single event deserializes the same as a
/// full week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawWeeklyEvents {
    #[serde(default, rename = "event")]
    pub events: Vec<RawEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, rename = "@id")]
    pub id: Option<String>,
    #[serde(default, rename = "@date")]
    pub date: Option<String>,
    #[serde(default, rename = "@time")]
    pub time: Option<String>,
    #[serde(default, rename = "@currency")]
    pub currency: Option<String>,
    #[serde(default, rename = "@country")]
    pub country: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub actual: Option<String>,
    #[serde(default)]
    pub forecast: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// A source record that could not be normalized, with the reason it was
/// skipped. Carried alongside the good records instead of aborting the
/// batch.
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

/// Parse the raw XML feed body.
pub fn parse_feed(xml: &str) -> Result<RawWeeklyEvents> {
    let parsed: RawWeeklyEvents = quick_xml::de::from_str(xml)?;
    Ok(parsed)
}

/// Normalize a raw batch into canonical events.
///
/// Per-record isolation: one unparseable record is skipped and reported,
/// the rest of the batch proceeds. Output order follows source order.
pub fn normalize_calendar(raw: &RawWeeklyEvents) -> (Vec<EconomicEvent>, Vec<SkippedRecord>) {
    let mut events = Vec::with_capacity(raw.events.len());
    let mut skipped = Vec::new();

    for (index, record) in raw.events.iter().enumerate() {
        match normalize_event(record) {
            Ok(event) => events.push(event),
            Err(e) => {
                debug!(index, error = %e, "Skipping unparseable calendar record");
                skipped.push(SkippedRecord {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    (events, skipped)
}

fn normalize_event(record: &RawEvent) -> Result<EconomicEvent> {
    let id = record
        .id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(generate_id);

    let occurs_at = parse_occurs_at(record.date.as_deref(), record.time.as_deref())?;

    Ok(EconomicEvent {
        id,
        occurs_at,
        currency: field_or(record.currency.as_deref(), "USD"),
        title: field_or(record.title.as_deref(), "Economic Event"),
        impact: Impact::parse(record.impact.as_deref()),
        actual: parse_measure(record.actual.as_deref()),
        forecast: parse_measure(record.forecast.as_deref()),
        previous: parse_measure(record.previous.as_deref()),
        country: field_or(record.country.as_deref(), ""),
    })
}

fn field_or(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Opaque token for records that arrive without an id.
fn generate_id() -> String {
    format!("{}{}", GENERATED_ID_PREFIX, Uuid::new_v4().simple())
}

/// Combine the vendor's date and time strings into one timestamp.
///
/// A missing or unparseable date degrades to the current timestamp rather
/// than failing the record; a missing time means midnight. A time string
/// that is present but malformed is the one genuinely unparseable case and
/// fails the record.
fn parse_occurs_at(date: Option<&str>, time: Option<&str>) -> Result<DateTime<Utc>> {
    let parsed_date = date.and_then(parse_event_date);
    let parsed_time = match time {
        Some(t) if !t.trim().is_empty() => Some(parse_event_time(t)?),
        _ => None,
    };

    let occurs_at = match (parsed_date, parsed_time) {
        (Some(d), Some(t)) => d.and_time(t).and_utc(),
        (Some(d), None) => d.and_time(NaiveTime::MIN).and_utc(),
        (None, Some(t)) => Utc::now().date_naive().and_time(t).and_utc(),
        (None, None) => Utc::now(),
    };

    Ok(occurs_at)
}

/// Accept `MM/DD/YYYY` (the vendor's usual form) or ISO `YYYY-MM-DD`.
fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Parse a `H:MM am|pm` time string. 12-hour conversion: pm adds 12 except
/// at 12 (`12:00 pm` is noon), `12:xx am` maps to hour 0. A bare 24-hour
/// `H:MM` without a period is accepted as-is.
fn parse_event_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    let mut parts = raw.split_whitespace();
    let clock = parts
        .next()
        .ok_or_else(|| AppError::Parse(format!("Empty time string: '{}'", raw)))?;
    let period = parts.next().map(|p| p.to_lowercase());

    let (hour_str, minute_str) = match clock.split_once(':') {
        Some((h, m)) => (h, m),
        None => (clock, "0"),
    };

    let mut hour: u32 = hour_str
        .parse()
        .map_err(|_| AppError::Parse(format!("Invalid hour in time string: '{}'", raw)))?;
    let minute: u32 = minute_str
        .parse()
        .map_err(|_| AppError::Parse(format!("Invalid minutes in time string: '{}'", raw)))?;

    match period.as_deref() {
        Some("pm") => {
            if hour < 12 {
                hour += 12;
            }
        }
        Some("am") => {
            if hour == 12 {
                hour = 0;
            }
        }
        Some(other) => {
            return Err(AppError::Parse(format!(
                "Invalid period '{}' in time string: '{}'",
                other, raw
            )))
        }
        None => {}
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| AppError::Parse(format!("Time out of range: '{}'", raw)))
}

/// Numeric measure from a loosely formatted vendor string ("0.3%", "2.5").
/// Anything non-numeric resolves to None rather than an error.
fn parse_measure(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.trim_end_matches('%').trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const SINGLE_EVENT_FEED: &str = r#"
        <weeklyevents>
            <event id="evt-77" date="11/21/2025" time="2:30 pm" currency="EUR" country="EU">
                <title>ECB Press Conference</title>
                <impact>High</impact>
                <actual>0.3%</actual>
                <forecast>0.2%</forecast>
                <previous>0.1%</previous>
            </event>
        </weeklyevents>"#;

    #[test]
    fn test_parse_feed_single_event() {
        let raw = parse_feed(SINGLE_EVENT_FEED).unwrap();
        assert_eq!(raw.events.len(), 1);
        assert_eq!(raw.events[0].id.as_deref(), Some("evt-77"));
        assert_eq!(raw.events[0].title.as_deref(), Some("ECB Press Conference"));
    }

    #[test]
    fn test_parse_feed_multiple_events() {
        let xml = r#"
            <weeklyevents>
                <event date="11/21/2025"><title>A</title></event>
                <event date="11/22/2025"><title>B</title></event>
            </weeklyevents>"#;
        let raw = parse_feed(xml).unwrap();
        assert_eq!(raw.events.len(), 2);
    }

    #[test]
    fn test_normalize_single_event_end_to_end() {
        let xml = r#"
            <weeklyevents>
                <event date="11/21/2025" time="2:30 pm">
                    <title>Retail Sales</title>
                </event>
            </weeklyevents>"#;
        let raw = parse_feed(xml).unwrap();
        let (events, skipped) = normalize_calendar(&raw);

        assert!(skipped.is_empty());
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(
            event.occurs_at,
            NaiveDate::from_ymd_opt(2025, 11, 21)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
                .and_utc()
        );
        assert!(!event.id.is_empty());
        assert!(event.id.starts_with(GENERATED_ID_PREFIX));
        assert_eq!(event.impact, Impact::Low);
        assert_eq!(event.currency, "USD");
    }

    #[test]
    fn test_time_conversion_edges() {
        assert_eq!(
            parse_event_time("12:00 am").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_event_time("12:00 pm").unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap()
        );
        assert_eq!(
            parse_event_time("1:30 pm").unwrap(),
            NaiveTime::from_hms_opt(13, 30, 0).unwrap()
        );
        assert_eq!(
            parse_event_time("9:15 am").unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_malformed_time_is_error() {
        assert!(parse_event_time("25:99").is_err());
        assert!(parse_event_time("noon pm").is_err());
        assert!(parse_event_time("2:30 xm").is_err());
    }

    #[test]
    fn test_malformed_record_skipped_batch_proceeds() {
        let xml = r#"
            <weeklyevents>
                <event date="11/21/2025" time="8:30 am"><title>Good</title></event>
                <event date="11/21/2025" time="not a time"><title>Bad</title></event>
                <event date="11/22/2025" time="9:00 am"><title>Also Good</title></event>
            </weeklyevents>"#;
        let raw = parse_feed(xml).unwrap();
        let (events, skipped) = normalize_calendar(&raw);

        assert_eq!(events.len(), 2);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 1);
        assert_eq!(events[0].title, "Good");
        assert_eq!(events[1].title, "Also Good");
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let raw = parse_feed(SINGLE_EVENT_FEED).unwrap();
        let (events, skipped) = normalize_calendar(&raw);
        assert!(events.len() <= raw.events.len());
        assert_eq!(events.len() + skipped.len(), raw.events.len());
    }

    #[test]
    fn test_missing_date_uses_current_timestamp() {
        let before = Utc::now();
        let occurs_at = parse_occurs_at(None, None).unwrap();
        let after = Utc::now();
        assert!(occurs_at >= before && occurs_at <= after);
    }

    #[test]
    fn test_missing_time_means_midnight() {
        let occurs_at = parse_occurs_at(Some("11/21/2025"), None).unwrap();
        assert_eq!(occurs_at.time().hour(), 0);
        assert_eq!(occurs_at.time().minute(), 0);
    }

    #[test]
    fn test_iso_date_accepted() {
        let occurs_at = parse_occurs_at(Some("2025-11-21"), Some("8:00 am")).unwrap();
        assert_eq!(occurs_at.date_naive(), NaiveDate::from_ymd_opt(2025, 11, 21).unwrap());
    }

    #[test]
    fn test_measure_parsing() {
        assert_eq!(parse_measure(Some("0.3%")), Some(0.3));
        assert_eq!(parse_measure(Some("2.5")), Some(2.5));
        assert_eq!(parse_measure(Some("n/a")), None);
        assert_eq!(parse_measure(Some("")), None);
        assert_eq!(parse_measure(None), None);
    }

    #[test]
    fn test_supplied_id_preserved() {
        let raw = parse_feed(SINGLE_EVENT_FEED).unwrap();
        let (events, _) = normalize_calendar(&raw);
        assert_eq!(events[0].id, "evt-77");
        assert_eq!(events[0].impact, Impact::High);
        assert_eq!(events[0].actual, Some(0.3));
        assert_eq!(events[0].forecast, Some(0.2));
        assert_eq!(events[0].previous, Some(0.1));
    }
}
