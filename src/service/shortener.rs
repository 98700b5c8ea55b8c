//! Short link creation and resolution.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use crate::error::AppError;
use crate::store::MappingStore;
use crate::utils::codegen::{generate_code, validate_custom_code};
use crate::utils::url_check::validate_url;

/// Attempt bound for the generated-code collision loop. At 62^6 possible
/// codes, repeated exhaustion indicates a misbehaving store, not bad luck.
const MAX_GENERATE_ATTEMPTS: u32 = 5;

/// Orchestrates code allocation and resolution on top of a [`MappingStore`].
///
/// The service never pre-checks code availability with a read; the store's
/// atomic `try_create` is the single source of truth for uniqueness.
pub struct ShortenerService {
    store: Arc<dyn MappingStore>,
}

impl ShortenerService {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Creates a mapping from a short code to `destination` and returns the
    /// code.
    ///
    /// With a custom code: validates it and makes exactly one insertion
    /// attempt; an occupied code is a conflict, never retried with a
    /// generated fallback. Without one: generates fresh candidates in a
    /// bounded loop, discarding each collided candidate.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL or custom code
    /// - [`AppError::Conflict`] when the custom code is already taken
    /// - [`AppError::Internal`] on store failure, entropy failure, or
    ///   exhaustion of the generation attempts
    pub async fn create_mapping(
        &self,
        destination: &str,
        custom_code: Option<String>,
        ttl: Option<Duration>,
    ) -> Result<String, AppError> {
        validate_url(destination)?;

        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            if !self.store.try_create(&code, destination, ttl).await? {
                return Err(AppError::conflict(
                    "Short code already taken",
                    json!({ "code": code }),
                ));
            }
            return Ok(code);
        }

        for attempt in 0..MAX_GENERATE_ATTEMPTS {
            let code = generate_code()?;

            if self.store.try_create(&code, destination, ttl).await? {
                return Ok(code);
            }
            tracing::warn!(attempt, code = %code, "Generated code collided, retrying");
        }

        tracing::error!(
            attempts = MAX_GENERATE_ATTEMPTS,
            "Code generation attempts exhausted"
        );
        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_GENERATE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its destination URL.
    ///
    /// The code shape is not validated; a malformed code simply will not be
    /// found.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] when the code is absent or expired
    /// - [`AppError::Internal`] on store failure
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        match self.store.lookup(code).await? {
            Some(destination) => Ok(destination),
            None => Err(AppError::not_found("Unknown code", json!({ "code": code }))),
        }
    }
}
