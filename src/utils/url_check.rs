//! Destination URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that the destination is an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the string does not parse as an
/// absolute URL or uses a different scheme.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    let parsed = Url::parse(input).map_err(|e| {
        AppError::bad_request(format!("Invalid URL: {e}"), json!({ "field": "url" }))
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::bad_request(
                "Only http/https URLs are allowed",
                json!({ "field": "url", "scheme": other }),
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::bad_request(
            "URL must have a host",
            json!({ "field": "url" }),
        ));
    }

    Ok(())
}
