//! In-process mapping store for tests and local development.

use super::service::{MappingStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    destination: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// A mapping store backed by an in-process hash map.
///
/// Satisfies the same contract as [`crate::store::RedisStore`]: `try_create`
/// is atomic (a single mutex guards the map) and TTLs are honored by lazy
/// expiry at access time. State does not survive the process, so this is
/// only suitable for tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn try_create(
        &self,
        code: &str,
        destination: &str,
        ttl: Option<Duration>,
    ) -> StoreResult<bool> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("mapping store lock poisoned");

        if let Some(existing) = entries.get(code) {
            if !existing.is_expired(now) {
                return Ok(false);
            }
        }

        entries.insert(
            code.to_string(),
            Entry {
                destination: destination.to_string(),
                expires_at: ttl.map(|ttl| now + ttl),
            },
        );
        Ok(true)
    }

    async fn lookup(&self, code: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("mapping store lock poisoned");

        match entries.get(code) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(code);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.destination.clone())),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
