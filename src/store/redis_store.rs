//! Redis-backed mapping store implementation.

use super::service::{MappingStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis mapping store.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Uniqueness rests on a single `SET ... NX` round-trip; there is no
/// read-before-write, so the guarantee holds across concurrent callers and
/// across service instances sharing one Redis.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            key_prefix: "short:".to_string(),
        };
        store.ping().await?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl MappingStore for RedisStore {
    async fn try_create(
        &self,
        code: &str,
        destination: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<bool> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let mut cmd = redis::cmd("SET");
        cmd.arg(&key).arg(destination).arg("NX");
        if let Some(ttl) = ttl {
            cmd.arg("EX").arg(ttl.as_secs().max(1));
        }

        // SET NX replies OK when the key was set, nil when it already existed.
        let reply: Option<String> = cmd
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Operation(format!("Redis SET NX failed for {}: {}", key, e)))?;

        let created = reply.is_some();
        debug!("Store SET NX: {} -> created={}", code, created);
        Ok(created)
    }

    async fn lookup(&self, code: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let destination: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| StoreError::Operation(format!("Redis GET failed for {}: {}", key, e)))?;

        match &destination {
            Some(url) => debug!("Store HIT: {} -> {}", code, url),
            None => debug!("Store MISS: {}", code),
        }
        Ok(destination)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))
    }
}
