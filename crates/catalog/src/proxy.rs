//! Read-through caching proxy over the upstream catalog.
//!
//! Every operation goes through the shared [`CacheStore`] before touching the
//! upstream. Cache keys and lifetimes:
//!
//! | Key                              | Value                  | TTL  |
//! |----------------------------------|------------------------|------|
//! | `pokemon_list_<limit>_<offset>`  | `Vec<CreatureDetail>`  | 5 m  |
//! | `type_filter_<type>`             | `Vec<CreatureDetail>`  | 5 m  |
//! | detail URL                       | `CreatureDetail`       | 1 h  |
//! | `all_pokemon_names`              | `Vec<CatalogEntry>`    | 24 h |
//!
//! Failure handling differs per operation: [`CatalogProxy::list_page`]
//! propagates a failed listing call, while [`CatalogProxy::search`] and
//! [`CatalogProxy::filter_by_type`] degrade to an empty result. A detail
//! that cannot be fetched is dropped from whatever page it belonged to.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

use crate::cache::CacheStore;
use crate::client::{CatalogClient, CatalogClientError};
use crate::models::{CatalogEntry, CreatureDetail, DetailResponse, ListResponse, TypeResponse};

/// Cache key of the full catalog listing used by [`CatalogProxy::search`].
pub const MASTER_INDEX_KEY: &str = "all_pokemon_names";

pub const LIST_PAGE_TTL: Duration = Duration::from_secs(5 * 60);
pub const TYPE_FILTER_TTL: Duration = Duration::from_secs(5 * 60);
pub const DETAIL_TTL: Duration = Duration::from_secs(60 * 60);
pub const MASTER_INDEX_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Maximum number of results returned by search and type filtering.
pub const MAX_RESULTS: usize = 20;

/// Listing size requested when building the master index. Larger than the
/// whole catalog, so one call returns every entry.
const MASTER_INDEX_LIMIT: u32 = 10_000;

/// Errors surfaced by [`CatalogProxy::list_page`] and [`CatalogProxy::prime_index`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog upstream unavailable: {0}")]
    Upstream(#[from] CatalogClientError),

    #[error("Unexpected catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Upstream type names are lowercase ASCII slugs such as `fire` or
/// `shadow`. Anything else would change the request path.
fn is_type_slug(kind: &str) -> bool {
    !kind.is_empty()
        && kind
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Cache key for a list page.
pub fn list_page_key(limit: u32, offset: u32) -> String {
    format!("pokemon_list_{limit}_{offset}")
}

/// Cache key for a type filter. `kind` must already be lowercased.
pub fn type_filter_key(kind: &str) -> String {
    format!("type_filter_{kind}")
}

/// Catalog operations backed by an upstream client and a shared cache.
///
/// Cheaply cloneable; clones share the client and the cache.
#[derive(Clone)]
pub struct CatalogProxy {
    client: Arc<dyn CatalogClient>,
    cache: CacheStore,
    base_url: Arc<str>,
}

impl CatalogProxy {
    /// * `base_url` - upstream API root without trailing slash, e.g.
    ///   `https://pokeapi.co/api/v2`.
    pub fn new(client: Arc<dyn CatalogClient>, cache: CacheStore, base_url: &str) -> Self {
        Self {
            client,
            cache,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Return `limit` detailed entries starting at `offset`.
    ///
    /// Kicks off background index priming when the index is missing, without
    /// waiting for it. Fails only if the listing call itself fails; entries
    /// whose detail cannot be fetched are left out, so the page may be
    /// shorter than `limit`.
    pub async fn list_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<CreatureDetail>, CatalogError> {
        if self.master_index().await.is_none() {
            self.spawn_index_priming();
        }

        let key = list_page_key(limit, offset);
        if let Some(page) = self.cache.get::<Vec<CreatureDetail>>(&key).await {
            tracing::debug!(limit, offset, "List page served from cache");
            return Ok(page.as_ref().clone());
        }

        tracing::debug!(limit, offset, "List page cache miss, fetching from upstream");
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        let listing: ListResponse = self.fetch(&url).await.inspect_err(|e| {
            tracing::error!(error = %e, limit, offset, "Catalog listing request failed");
        })?;

        let page = self.resolve_details(&listing.results).await;
        self.cache.set(key, page.clone(), LIST_PAGE_TTL).await;
        Ok(page)
    }

    /// Case-insensitive substring search over entry names.
    ///
    /// Uses the cached master index, building it first (and waiting) when it
    /// is missing. Returns at most [`MAX_RESULTS`] matches in catalog order.
    /// Never fails: an index that cannot be built yields an empty result.
    pub async fn search(&self, term: &str) -> Vec<CreatureDetail> {
        let term = term.trim().to_lowercase();

        let index = match self.master_index().await {
            Some(index) => {
                tracing::debug!(%term, "Searching cached master index");
                index
            }
            None => {
                tracing::info!(%term, "Master index not ready, priming before search");
                if let Err(e) = self.prime_index().await {
                    tracing::warn!(error = %e, "Master index priming failed during search");
                }
                match self.master_index().await {
                    Some(index) => index,
                    None => return Vec::new(),
                }
            }
        };

        let matches: Vec<CatalogEntry> = index
            .iter()
            .filter(|entry| entry.name.contains(term.as_str()))
            .take(MAX_RESULTS)
            .cloned()
            .collect();

        self.resolve_details(&matches).await
    }

    /// Entries of the given type (first [`MAX_RESULTS`] members), detailed.
    ///
    /// An upstream failure is logged and yields an empty result rather than
    /// an error. So does a name that is not a plain type slug, which is never
    /// sent upstream.
    pub async fn filter_by_type(&self, kind: &str) -> Vec<CreatureDetail> {
        let kind = kind.to_lowercase();
        if !is_type_slug(&kind) {
            if !kind.is_empty() {
                tracing::debug!(%kind, "Rejected type name, returning no results");
            }
            return Vec::new();
        }

        let key = type_filter_key(&kind);
        if let Some(page) = self.cache.get::<Vec<CreatureDetail>>(&key).await {
            tracing::debug!(%kind, "Type filter served from cache");
            return page.as_ref().clone();
        }

        let url = format!("{}/type/{kind}", self.base_url);
        match self.fetch::<TypeResponse>(&url).await {
            Ok(response) => {
                let members: Vec<CatalogEntry> = response
                    .pokemon
                    .into_iter()
                    .take(MAX_RESULTS)
                    .map(|member| member.pokemon)
                    .collect();
                let page = self.resolve_details(&members).await;
                self.cache.set(key, page.clone(), TYPE_FILTER_TTL).await;
                page
            }
            Err(e) => {
                tracing::error!(error = %e, %kind, "Type lookup failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Build the master index and wait for it. No-op when already cached.
    pub async fn prime_index(&self) -> Result<(), CatalogError> {
        if self.master_index().await.is_some() {
            return Ok(());
        }

        tracing::info!("Downloading master index");
        let url = format!("{}/pokemon?limit={MASTER_INDEX_LIMIT}", self.base_url);
        let listing: ListResponse = self.fetch(&url).await?;
        let count = listing.results.len();
        self.cache
            .set(MASTER_INDEX_KEY, listing.results, MASTER_INDEX_TTL)
            .await;
        tracing::info!(count, "Master index cached");
        Ok(())
    }

    /// Build the master index on a detached task.
    ///
    /// Failures are logged on the task; the handle only reports completion.
    pub fn spawn_index_priming(&self) -> JoinHandle<()> {
        let proxy = self.clone();
        tokio::spawn(async move {
            if let Err(e) = proxy.prime_index().await {
                tracing::error!(error = %e, "Background master index priming failed");
            }
        })
    }

    // ---- private helpers ----

    async fn master_index(&self) -> Option<Arc<Vec<CatalogEntry>>> {
        self.cache.get::<Vec<CatalogEntry>>(MASTER_INDEX_KEY).await
    }

    /// GET `url` and decode the JSON body as `T`.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let body = self.client.get_json(url).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Resolve all entries concurrently, keeping input order and dropping
    /// failures.
    async fn resolve_details(&self, entries: &[CatalogEntry]) -> Vec<CreatureDetail> {
        let lookups = entries.iter().map(|entry| self.resolve_detail(entry));
        futures::future::join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn resolve_detail(&self, entry: &CatalogEntry) -> Option<CreatureDetail> {
        if let Some(cached) = self.cache.get::<CreatureDetail>(&entry.url).await {
            return Some(cached.as_ref().clone());
        }

        match self.fetch::<DetailResponse>(&entry.url).await {
            Ok(raw) => {
                let detail = CreatureDetail::from(raw);
                self.cache.set(entry.url.clone(), detail.clone(), DETAIL_TTL).await;
                Some(detail)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    name = %entry.name,
                    "Dropping entry with unavailable detail"
                );
                None
            }
        }
    }
}
