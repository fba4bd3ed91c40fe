use std::sync::Arc;

use pokeadmin_catalog::{CacheStore, CatalogClient, CatalogProxy};
use pokeadmin_db::repositories::UserStore;

use crate::config::ServerConfig;
use crate::services::auth::AuthService;
use crate::services::users::UserDirectory;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// User CRUD over the configured store.
    pub users: UserDirectory,
    /// Credential checks and token issuance.
    pub auth: AuthService,
    /// Cached catalog proxy.
    pub catalog: CatalogProxy,
}

impl AppState {
    /// Wire services over the given user store and upstream client.
    ///
    /// The catalog cache is created here and sized from
    /// `config.catalog.cache_capacity`.
    pub fn new(
        config: ServerConfig,
        store: Arc<dyn UserStore>,
        client: Arc<dyn CatalogClient>,
    ) -> Self {
        let users = UserDirectory::new(store);
        let auth = AuthService::new(users.clone(), config.jwt.clone());
        let cache = CacheStore::new(config.catalog.cache_capacity);
        let catalog = CatalogProxy::new(client, cache, &config.catalog.base_url);

        Self {
            config: Arc::new(config),
            users,
            auth,
            catalog,
        }
    }
}
