//! # Shortlink
//!
//! A fast and secure URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Store Layer** ([`store`]) - The [`store::MappingStore`] trait plus a
//!   Redis implementation; the atomic create-if-absent operation here is the
//!   sole uniqueness arbiter for short codes
//! - **Service Layer** ([`service`]) - Code allocation, bounded collision
//!   retry, and resolution
//! - **HTTP Layer** ([`handlers`], [`routes`]) - Axum handlers, DTOs, and
//!   router wiring
//!
//! ## Features
//!
//! - Custom short codes with validation
//! - Cryptographically secure generated codes
//! - Optional per-link TTL enforced by Redis
//! - Structured request logging and configurable CORS
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the service at Redis (default: redis://localhost:6379)
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::error::AppError;
    pub use crate::service::ShortenerService;
    pub use crate::state::AppState;
    pub use crate::store::{MappingStore, MemoryStore, RedisStore};
}
