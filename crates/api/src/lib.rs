//! # Slotbook API
//!
//! The API crate exposes the availability slot engine over HTTP for the
//! booking widgets: slot lists for a provider window, weekday gating for
//! calendar dates, and the date → from-time → to-time selection flow.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on `slotbook-core`
//! - **Middleware**: Error mapping to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Requests carry all provider data,
//! so the only shared state is configuration and the slot cache.

/// Memoized slot lists per availability window
pub mod cache;
/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::HeaderValue};
use eyre::Result;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::cache::SlotCache;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub config: config::ApiConfig,
    pub slot_cache: SlotCache,
}

impl ApiState {
    pub fn new(config: config::ApiConfig) -> Self {
        let slot_cache = SlotCache::with_capacity(config.slot_cache_capacity);
        Self { config, slot_cache }
    }
}

/// Builds the application router with all routes and layers applied
pub fn app(state: Arc<ApiState>) -> Router {
    let cors = state.config.cors_origins.as_deref().map(cors_layer);
    let request_timeout = Duration::from_secs(state.config.request_timeout);

    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot and calendar endpoints
        .merge(routes::availability::routes())
        // Booking-flow transitions
        .merge(routes::selection::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        );

    // Apply CORS configuration if origins are specified
    match cors {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

// Credentialed CORS needs explicit origins, so a wildcard entry is dropped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| {
            let wildcard = origin.as_str() == "*";
            if wildcard {
                warn!("Ignoring wildcard CORS origin; list origins explicitly");
            }
            !wildcard
        })
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration
///
/// Installs the global tracing subscriber at the configured level, builds the
/// router and serves it until the listener fails.
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = slotbook_api::config::ApiConfig::from_env()?;
/// slotbook_api::start_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let addr = config.server_addr();
    let state = Arc::new(ApiState::new(config));
    let app = app(state);

    // Start the HTTP server
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
