//! Credential checks and access-token issuance.

use std::sync::LazyLock;

use pokeadmin_core::types::DbId;
use pokeadmin_db::models::user::UserResponse;
use serde::Serialize;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::services::users::{NewUser, UserDirectory};

/// Successful login payload.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Public user info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Hash verified against when there is no real one to check, so every
/// failed lookup costs one full Argon2id verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("pokeadmin-dummy-credential").ok());

fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

#[derive(Clone)]
pub struct AuthService {
    users: UserDirectory,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(users: UserDirectory, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    /// Check an email/password pair.
    ///
    /// Returns `None` for an unknown email, a user without a stored hash, and
    /// a wrong password alike. Each of those paths runs one Argon2id
    /// verification, so response time does not reveal which one it was.
    pub async fn validate_user(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<UserResponse>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            verify_against_dummy(password);
            return Ok(None);
        };
        let Some(hash) = user.password_hash.as_deref() else {
            verify_against_dummy(password);
            return Ok(None);
        };

        match verify_password(password, hash) {
            Ok(true) => Ok(Some(user.into())),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!(
                    user_id = user.id,
                    error = %e,
                    "Stored password hash is unreadable"
                );
                verify_against_dummy(password);
                Ok(None)
            }
        }
    }

    /// Issue an access token for an already validated user.
    pub fn login(&self, user: &UserResponse) -> AppResult<LoginResponse> {
        let access_token = generate_access_token(user.id, &user.email, &user.role, &self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            user: UserInfo {
                id: user.id,
                email: user.email.clone(),
                name: user.name.clone(),
                role: user.role.clone(),
            },
        })
    }

    /// Self-service sign-up; same rules as an admin-created user.
    pub async fn register(&self, input: NewUser) -> AppResult<UserResponse> {
        self.users.create(input).await
    }
}
