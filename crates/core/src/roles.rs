//! Well-known role name constants.
//!
//! Roles are free-form strings stored on the user row and copied into the
//! access token claims.

pub const ROLE_USER: &str = "USER";

/// Role assigned to users created without an explicit role.
pub const DEFAULT_ROLE: &str = ROLE_USER;
