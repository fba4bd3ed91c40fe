//! Process-local key/value cache with an independent TTL per entry.
//!
//! Values of any `'static` type are stored behind `Arc<dyn Any>` and
//! downcast on read, so one store serves list pages, detail records, type
//! filters and the master index. Expiry is delegated to moka through an
//! [`Expiry`] policy that reads the TTL recorded alongside each value.

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;
use moka::Expiry;

/// A stored value together with the TTL it was written with.
#[derive(Clone)]
struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    ttl: Duration,
}

/// Expires each entry `ttl` after its most recent write. Reads do not
/// extend the lifetime.
struct PerEntryTtl;

impl Expiry<String, CacheEntry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Shared cache store. Cloning is cheap and every clone sees the same entries.
///
/// Concurrent `get`/`set` are safe; the last write for a key wins. There is
/// no read-modify-write primitive.
#[derive(Clone)]
pub struct CacheStore {
    inner: Cache<String, CacheEntry>,
}

impl CacheStore {
    /// Create a store holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { inner }
    }

    /// Read `key` as a `T`.
    ///
    /// Returns `None` when the key is absent, its TTL has elapsed, or the
    /// stored value is not a `T`.
    pub async fn get<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let entry = self.inner.get(key).await?;
        match entry.value.downcast::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(key, "Cached value has an unexpected type, treating as miss");
                None
            }
        }
    }

    /// Store `value` under `key`, replacing any previous entry, for `ttl`.
    pub async fn set<T>(&self, key: impl Into<String>, value: T, ttl: Duration)
    where
        T: Send + Sync + 'static,
    {
        let entry = CacheEntry {
            value: Arc::new(value),
            ttl,
        };
        self.inner.insert(key.into(), entry).await;
    }
}
