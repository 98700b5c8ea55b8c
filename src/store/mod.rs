//! Atomic key-value mapping storage.
//!
//! Provides a [`MappingStore`] trait with two implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - In-process implementation for tests and local development
//!
//! The store is the sole uniqueness arbiter in the system: `try_create` is an
//! atomic set-if-absent, and nothing above this layer may assume a code is
//! unique unless that operation reported it.

mod memory_store;
mod redis_store;
mod service;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
pub use service::{MappingStore, StoreError, StoreResult};
