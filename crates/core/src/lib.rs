//! Shared domain primitives for the pokeadmin backend.
//!
//! Kept free of HTTP and database concerns so every other crate in the
//! workspace can depend on it.

pub mod error;
pub mod roles;
pub mod types;
