#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use shortlink::handlers::{redirect_handler, shorten_handler};
use shortlink::service::ShortenerService;
use shortlink::state::AppState;
use shortlink::store::{MappingStore, MemoryStore};

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds an [`AppState`] backed by a fresh in-memory store, returning the
/// store handle so tests can seed or inspect mappings directly.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shortener = Arc::new(ShortenerService::new(
        store.clone() as Arc<dyn MappingStore>
    ));

    let state = AppState {
        shortener,
        base_url: TEST_BASE_URL.to_string(),
    };

    (state, store)
}

/// Router with the public surface: creation and redirect.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}
