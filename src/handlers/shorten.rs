//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use std::time::Duration;

use crate::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link",  // optional
///   "ttl": 3600                 // optional, seconds; 0/absent = no expiry
/// }
/// ```
///
/// # Response
///
/// HTTP 201 with:
///
/// ```json
/// {
///   "short_url": "https://s.example.com/abc123",
///   "code": "abc123"
/// }
/// ```
///
/// # Errors
///
/// - 400 for a missing/invalid URL or invalid custom code
/// - 409 when the custom code is already taken
/// - 500 on store failure or generated-code exhaustion
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    if payload.url.is_empty() {
        return Err(AppError::bad_request(
            "url is required",
            json!({ "field": "url" }),
        ));
    }

    let custom_code = payload.custom_code.filter(|code| !code.is_empty());
    let ttl = payload
        .ttl
        .filter(|&secs| secs > 0)
        .map(|secs| Duration::from_secs(secs as u64));

    let code = state
        .shortener
        .create_mapping(&payload.url, custom_code, ttl)
        .await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse { short_url, code }),
    ))
}
