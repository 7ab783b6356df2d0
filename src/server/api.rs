use crate::models::{CalendarWeek, MarketCategory};
use crate::server::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// News categories the dashboard offers, plus `all`.
const NEWS_CATEGORIES: &[&str] = &["business", "finance", "technology", "economics", "crypto"];

/// Query parameters for the calendar routes.
#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Week selector: this (default), next, last
    pub week: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// Category filter: business (default), finance, technology, economics,
    /// crypto, all
    pub category: Option<String>,
}

/// GET /api/health - Liveness check
#[instrument]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "OK",
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /api/calendar?week= - Raw calendar feed re-served as JSON
///
/// Gateway route: upstream errors are surfaced as a structured 500, never
/// swallowed. The fallback policy lives in the aggregator routes below,
/// not here.
#[instrument(skip(state))]
pub async fn calendar_handler(
    State(state): State<AppState>,
    Query(params): Query<WeekQuery>,
) -> impl IntoResponse {
    let week = match parse_week(params.week.as_deref()) {
        Ok(week) => week,
        Err(response) => return response,
    };

    debug!(week = %week, "Received raw calendar request");

    let parsed = match state.calendar.fetch_week(week).await {
        Ok(xml) => crate::normalize::parse_feed(&xml),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(raw) => {
            info!(week = %week, events = raw.events.len(), "Returning raw calendar");
            (
                StatusCode::OK,
                Json(serde_json::json!({ "weeklyevents": raw })),
            )
                .into_response()
        }
        Err(e) => {
            warn!(week = %week, error = %e, "Calendar fetch failed");
            upstream_error("Failed to fetch calendar data", e)
        }
    }
}

/// GET /api/event/:id - Pass-through event detail
#[instrument(skip(state))]
pub async fn event_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.calendar.fetch_event(&event_id).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            warn!(event_id = %event_id, error = %e, "Event fetch failed");
            upstream_error("Failed to fetch event data", e)
        }
    }
}

/// GET /api/history/:id - Pass-through event history
#[instrument(skip(state))]
pub async fn history_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> impl IntoResponse {
    match state.calendar.fetch_history(&event_id).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => {
            warn!(event_id = %event_id, error = %e, "History fetch failed");
            upstream_error("Failed to fetch event history", e)
        }
    }
}

/// GET /api/markets/:category - Normalized quotes with degraded signal
///
/// Facade route: never 500s for upstream failure, the response degrades to
/// demo data instead.
#[instrument(skip(state))]
pub async fn markets_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let category: MarketCategory = match category.parse() {
        Ok(category) => category,
        Err(message) => return bad_request(message),
    };

    let sourced = state.aggregator.get_quotes(category).await;
    info!(
        category = %category,
        quotes = sourced.data.len(),
        degraded = sourced.degraded,
        "Returning market quotes"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "degraded": sourced.degraded,
            "quotes": sourced.data,
        })),
    )
        .into_response()
}

/// GET /api/events?week= - Normalized calendar with degraded signal
#[instrument(skip(state))]
pub async fn events_handler(
    State(state): State<AppState>,
    Query(params): Query<WeekQuery>,
) -> impl IntoResponse {
    let week = match parse_week(params.week.as_deref()) {
        Ok(week) => week,
        Err(response) => return response,
    };

    let sourced = state.aggregator.get_calendar(week).await;
    info!(
        week = %week,
        events = sourced.data.len(),
        degraded = sourced.degraded,
        "Returning calendar events"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "degraded": sourced.degraded,
            "events": sourced.data,
        })),
    )
        .into_response()
}

/// GET /api/news?category= - Normalized headlines with degraded signal
#[instrument(skip(state))]
pub async fn news_handler(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> impl IntoResponse {
    let category = params.category.as_deref().unwrap_or("business");
    if category != "all" && !NEWS_CATEGORIES.contains(&category) {
        return bad_request(format!(
            "Unknown news category: '{}' (expected {}|all)",
            category,
            NEWS_CATEGORIES.join("|")
        ));
    }

    let sourced = state.aggregator.get_news(category).await;
    info!(
        category = %category,
        articles = sourced.data.len(),
        degraded = sourced.degraded,
        "Returning news"
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "degraded": sourced.degraded,
            "articles": sourced.data,
        })),
    )
        .into_response()
}

fn parse_week(raw: Option<&str>) -> Result<CalendarWeek, axum::response::Response> {
    match raw {
        None => Ok(CalendarWeek::default()),
        Some(raw) => raw.parse().map_err(bad_request),
    }
}

fn bad_request(message: String) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn upstream_error(label: &str, e: crate::error::AppError) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": label,
            "message": e.to_string(),
        })),
    )
        .into_response()
}
