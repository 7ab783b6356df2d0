pub mod api;

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::services::CalendarClient;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub calendar: CalendarClient,
}

impl AppState {
    pub fn new(config: &Config) -> crate::error::Result<Self> {
        Ok(AppState {
            aggregator: Arc::new(Aggregator::new(config)?),
            calendar: CalendarClient::new(&config.calendar_base_url, config.upstream_timeout())?,
        })
    }
}

/// Start the axum server.
pub async fn serve(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting marketpulse server");

    let state = AppState::new(&config)?;

    // The gateway serves browser clients from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    tracing::info!("Registering routes:");
    tracing::info!("  GET /api/health");
    tracing::info!("  GET /api/calendar?week=this|next|last");
    tracing::info!("  GET /api/event/:id");
    tracing::info!("  GET /api/history/:id");
    tracing::info!("  GET /api/markets/:category");
    tracing::info!("  GET /api/events?week=this|next|last");
    tracing::info!("  GET /api/news?category=business");

    let app = Router::new()
        .route("/api/health", get(api::health_handler))
        .route("/api/calendar", get(api::calendar_handler))
        .route("/api/event/:id", get(api::event_handler))
        .route("/api/history/:id", get(api::history_handler))
        .route("/api/markets/:category", get(api::markets_handler))
        .route("/api/events", get(api::events_handler))
        .route("/api/news", get(api::news_handler))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
