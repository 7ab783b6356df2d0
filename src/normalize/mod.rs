//! Normalizers: the only place untyped upstream payloads are allowed to
//! exist. Each domain has a total mapping from its raw vendor shape into
//! the canonical records in `models`; nothing downstream ever sees a
//! `serde_json::Value` or raw XML.

pub mod calendar;
pub mod news;
pub mod quotes;

pub use calendar::{normalize_calendar, parse_feed, RawEvent, RawWeeklyEvents, SkippedRecord};
pub use news::{normalize_news, NewsPayload};
pub use quotes::{normalize_quote, normalize_quote_batch};
