//! Request/response DTOs for link creation.

use serde::{Deserialize, Serialize};

/// Body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// Destination URL. Required; validated as absolute http/https.
    #[serde(default)]
    pub url: String,
    /// Optional user-chosen code. Empty string is treated as absent.
    #[serde(default)]
    pub custom_code: Option<String>,
    /// Optional TTL in seconds. Zero, negative, or absent means the mapping
    /// never expires.
    #[serde(default)]
    pub ttl: Option<i64>,
}

/// Body of a successful `POST /` (HTTP 201).
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub code: String,
}
