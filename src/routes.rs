//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a short link
//! - `GET  /{code}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Allowed origins from configuration
//! - **Timeout** - Request-scoped deadline bounding store round-trips
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::handlers::{redirect_handler, shorten_handler};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies allowed CORS origins and the request timeout
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// CORS middleware allowing the configured origins with GET/POST and a
/// Content-Type header, cached by browsers for five minutes.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(300))
}

/// Tracing middleware: an INFO span per request with method/URI, and an INFO
/// response event with status and millisecond latency.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
