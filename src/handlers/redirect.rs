//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// A single store lookup; no shape validation (a malformed code simply will
/// not be found) and no side effects.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let destination = state.shortener.resolve(&code).await?;

    // 302 Found, as browsers and link previews expect from shorteners.
    Ok((StatusCode::FOUND, [(header::LOCATION, destination)]))
}
