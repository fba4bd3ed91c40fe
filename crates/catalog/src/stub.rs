//! In-process [`CatalogClient`] for tests.
//!
//! Compiled only for this crate's tests or with the `test-util` feature, which
//! dependent crates enable from their `[dev-dependencies]`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::client::{CatalogClient, CatalogClientError};

/// [`CatalogClient`] serving canned JSON bodies keyed by URL.
///
/// Every request is recorded so callers can assert how often the upstream
/// was hit. Unknown URLs answer with a 404 [`CatalogClientError::Api`].
#[derive(Default)]
pub struct StubCatalogClient {
    bodies: Mutex<HashMap<String, serde_json::Value>>,
    requests: Mutex<Vec<String>>,
}

impl StubCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url` from now on.
    pub fn insert(&self, url: impl Into<String>, body: serde_json::Value) {
        lock(&self.bodies).insert(url.into(), body);
    }

    /// Stop serving `url`; later requests fail with 404.
    pub fn remove(&self, url: &str) {
        lock(&self.bodies).remove(url);
    }

    /// Number of requests made for exactly `url`.
    pub fn request_count(&self, url: &str) -> usize {
        lock(&self.requests).iter().filter(|u| *u == url).count()
    }

    /// Number of requests made for any URL.
    pub fn total_requests(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl CatalogClient for StubCatalogClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, CatalogClientError> {
        lock(&self.requests).push(url.to_string());
        lock(&self.bodies)
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogClientError::Api {
                status: 404,
                body: "Not Found".to_string(),
            })
    }
}

/// Lock a stub mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
