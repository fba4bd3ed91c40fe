//! Read-through caching proxy for the public creature catalog (PokeAPI).
//!
//! - [`client`] -- outbound HTTP adapter ([`CatalogClient`](client::CatalogClient)).
//! - [`cache`] -- process-local key/value store with per-entry TTLs.
//! - [`models`] -- upstream wire shapes and the simplified [`CreatureDetail`](models::CreatureDetail).
//! - [`proxy`] -- list, search and type-filter operations over the two.
//! - [`config`] -- environment configuration for the upstream and cache.
//! - `stub` -- canned upstream for tests (`test-util` feature).

pub mod cache;
pub mod client;
pub mod config;
pub mod models;
pub mod proxy;
#[cfg(any(test, feature = "test-util"))]
pub mod stub;

pub use cache::CacheStore;
pub use client::{CatalogClient, CatalogClientError, HttpCatalogClient};
pub use config::CatalogConfig;
pub use models::{CatalogEntry, CreatureDetail};
pub use proxy::{CatalogError, CatalogProxy};
#[cfg(any(test, feature = "test-util"))]
pub use stub::StubCatalogClient;
