use crate::error::{AppError, Result};
use crate::models::{display_name, Quote};
use serde_json::Value;
use tracing::warn;

/// Normalize one vendor chart payload into a canonical quote.
///
/// The payload nests the interesting fields under
/// `chart.result[0].meta.{previousClose, regularMarketPrice,
/// regularMarketVolume}`. A missing price is a parse failure; a missing or
/// zero previous close is not — the quote is produced with a zero delta and
/// flagged degraded instead.
pub fn normalize_quote(symbol: &str, payload: &Value) -> Result<Quote> {
    let meta = payload
        .get("chart")
        .and_then(|c| c.get("result"))
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("meta"))
        .ok_or_else(|| {
            AppError::Parse(format!("Missing chart.result[0].meta for {}", symbol))
        })?;

    let price = meta
        .get("regularMarketPrice")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| AppError::Parse(format!("Missing regularMarketPrice for {}", symbol)))?;

    let previous_close = meta
        .get("previousClose")
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    let volume = meta
        .get("regularMarketVolume")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);

    Ok(Quote::from_prices(
        symbol,
        display_name(symbol),
        price,
        previous_close,
        volume,
    ))
}

/// Normalize a batch of per-symbol fetch results.
///
/// Partial-success policy: a symbol whose fetch or parse failed is dropped
/// from the output (logged), never represented as a hole. Output order
/// follows input order.
pub fn normalize_quote_batch(fetched: Vec<(String, Result<Value>)>) -> Vec<Quote> {
    fetched
        .into_iter()
        .filter_map(|(symbol, result)| {
            let payload = match result {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Dropping symbol after fetch failure");
                    return None;
                }
            };
            match normalize_quote(&symbol, &payload) {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Dropping symbol after parse failure");
                    None
                }
            }
        })
        .collect()
}
