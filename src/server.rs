//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, liveness check, and Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::service::ShortenerService;
use crate::state::AppState;
use crate::store::RedisStore;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis connection (validated with PING; the service refuses to start
///   without a reachable store)
/// - Shortener service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The store is unreachable at startup
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = RedisStore::connect(&config.redis_url)
        .await
        .context("Store must be reachable at startup")?;

    let shortener = Arc::new(ShortenerService::new(Arc::new(store)));
    let state = AppState {
        shortener,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping");
}
