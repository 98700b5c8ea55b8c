//! Mapping store trait and error types.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing key is never an error; `lookup` reports it as `Ok(None)` and
/// `try_create` reports an occupied key as `Ok(false)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for the short code → destination URL mapping table.
///
/// Implementations must be thread-safe, and `try_create` must be atomic with
/// respect to concurrent callers using the same code: among any set of
/// simultaneous callers with identical codes, at most one observes `true`.
/// This holds across service instances sharing one backend, not just within
/// a single process.
///
/// # Implementations
///
/// - [`crate::store::RedisStore`] - Redis-backed store with TTL support
/// - [`crate::store::MemoryStore`] - In-process store for tests
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Atomically creates a mapping if the code is not already taken.
    ///
    /// # Arguments
    ///
    /// - `code` - The short code; the implementation derives the storage key
    /// - `destination` - The full URL to map to
    /// - `ttl` - When `Some`, the store autonomously removes the mapping once
    ///   the duration elapses; afterwards lookups behave as if the code never
    ///   existed. `None` means the mapping never expires.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the code was absent and is now mapped
    /// - `Ok(false)` if the code already existed; the stored value is left
    ///   unchanged
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only for backend failures, never for an
    /// occupied code.
    async fn try_create(
        &self,
        code: &str,
        destination: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<bool>;

    /// Retrieves the destination URL for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` when the code is mapped and not expired
    /// - `Ok(None)` when the code is absent or has expired (a normal miss)
    async fn lookup(&self, code: &str) -> StoreResult<Option<String>>;

    /// Checks that the store backend is reachable.
    ///
    /// Performed once at startup; a failure here is fatal to the service.
    async fn ping(&self) -> StoreResult<()>;
}
