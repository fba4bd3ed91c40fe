//! Repository layer.
//!
//! [`UserRepo`] is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Services do not call it directly;
//! they hold an `Arc<dyn UserStore>` so the Postgres-backed [`PgUserStore`]
//! can be swapped for [`MemoryUserStore`] in tests.

pub mod memory;
pub mod user_repo;

use async_trait::async_trait;
use pokeadmin_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};

pub use memory::MemoryUserStore;
pub use user_repo::{PgUserStore, UserRepo};

/// Storage operations the user directory depends on.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user, returning the created row.
    async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error>;

    /// Find a user by internal ID.
    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error>;

    /// Find a user by email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;

    /// List all users ordered by id descending.
    async fn list(&self) -> Result<Vec<User>, sqlx::Error>;

    /// Apply the non-`None` fields of `input`. Returns `None` if no row
    /// with the given `id` exists.
    async fn update(&self, id: DbId, input: &UpdateUser) -> Result<Option<User>, sqlx::Error>;

    /// Hard-delete a user. Returns `true` if a row was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
