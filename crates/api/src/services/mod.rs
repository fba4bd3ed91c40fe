//! Application services sitting between the HTTP handlers and storage.
//!
//! - [`users::UserDirectory`] -- user CRUD, email uniqueness, password hashing.
//! - [`auth::AuthService`] -- credential checks and access-token issuance.

pub mod auth;
pub mod users;
