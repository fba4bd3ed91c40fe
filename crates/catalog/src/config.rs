/// Default upstream base URL (no trailing slash).
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Default maximum number of cache entries.
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Configuration for the upstream catalog and its response cache.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, e.g. `https://pokeapi.co/api/v2`.
    pub base_url: String,
    /// Upper bound on cached entries (pages, details, type filters, index).
    pub cache_capacity: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables.
    ///
    /// | Env Var                  | Default                      |
    /// |--------------------------|------------------------------|
    /// | `CATALOG_BASE_URL`       | `https://pokeapi.co/api/v2`  |
    /// | `CATALOG_CACHE_CAPACITY` | `10000`                      |
    ///
    /// # Panics
    ///
    /// Panics if `CATALOG_CACHE_CAPACITY` is not a valid `u64`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let cache_capacity: u64 = std::env::var("CATALOG_CACHE_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_CACHE_CAPACITY.to_string())
            .parse()
            .expect("CATALOG_CACHE_CAPACITY must be a valid u64");

        Self {
            base_url,
            cache_capacity,
        }
    }
}
