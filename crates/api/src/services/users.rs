//! User directory: CRUD over the user store.
//!
//! Owns the password hash. Everything returned from here except
//! [`UserDirectory::find_by_email`] is a [`UserResponse`] with the hash
//! stripped.

use std::sync::Arc;

use pokeadmin_core::error::CoreError;
use pokeadmin_core::roles::DEFAULT_ROLE;
use pokeadmin_core::types::DbId;
use pokeadmin_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use pokeadmin_db::repositories::UserStore;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Input for creating a user (`POST /users`, `POST /auth/register`).
#[derive(Debug, Deserialize, Validate)]
pub struct NewUser {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
}

/// Partial update for `PATCH /users/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserChanges {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn UserStore>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a user. Fails with `Conflict` when the email is taken.
    pub async fn create(&self, input: NewUser) -> AppResult<UserResponse> {
        if self.store.find_by_email(&input.email).await?.is_some() {
            return Err(email_taken());
        }

        let password_hash = hash(&input.password)?;
        let dto = CreateUser {
            email: input.email,
            name: input.name,
            password_hash,
            role: input.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            phone: input.phone,
            address: input.address,
            avatar: input.avatar,
        };

        let user = self.store.create(&dto).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user.into())
    }

    /// All users, newest id first.
    pub async fn find_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.store.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn find_one(&self, id: DbId) -> AppResult<UserResponse> {
        self.store
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }

    /// Full record including the password hash. Only for credential checks.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.store.find_by_email(email).await?)
    }

    /// Apply `changes`. A new password is hashed before it is stored; without
    /// one the existing hash is kept.
    pub async fn update(&self, id: DbId, changes: UserChanges) -> AppResult<UserResponse> {
        tracing::debug!(user_id = id, "Updating user");

        if let Some(email) = &changes.email {
            if let Some(existing) = self.store.find_by_email(email).await? {
                if existing.id != id {
                    return Err(email_taken());
                }
            }
        }

        let password_hash = changes.password.as_deref().map(hash).transpose()?;
        let patch = UpdateUser {
            email: changes.email,
            name: changes.name,
            password_hash,
            role: changes.role,
            phone: changes.phone,
            address: changes.address,
            avatar: changes.avatar,
        };

        self.store
            .update(id, &patch)
            .await?
            .map(UserResponse::from)
            .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }

    /// Hard-delete a user.
    pub async fn remove(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::Core(CoreError::NotFound { entity: "User", id }));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Whether the backing store answers.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await.is_ok()
    }
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

fn email_taken() -> AppError {
    AppError::Core(CoreError::Conflict("Email is already registered".into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pokeadmin_db::repositories::MemoryUserStore;

    use super::*;

    fn directory() -> UserDirectory {
        UserDirectory::new(Arc::new(MemoryUserStore::new()))
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Ash Ketchum".to_string(),
            password: "pallet-town".to_string(),
            role: None,
            phone: None,
            address: None,
            avatar: None,
        }
    }

    async fn stored_hash(directory: &UserDirectory, email: &str) -> Option<String> {
        directory
            .find_by_email(email)
            .await
            .unwrap()
            .expect("user should exist")
            .password_hash
    }

    #[tokio::test]
    async fn create_hashes_password_and_defaults_role() {
        let directory = directory();
        let user = directory.create(new_user("ash@kanto.test")).await.unwrap();

        assert_eq!(user.email, "ash@kanto.test");
        assert_eq!(user.role, DEFAULT_ROLE);

        let hash = stored_hash(&directory, "ash@kanto.test").await.unwrap();
        assert_ne!(hash, "pallet-town");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn create_duplicate_email_conflicts_without_persisting() {
        let directory = directory();
        directory.create(new_user("ash@kanto.test")).await.unwrap();

        let result = directory.create(new_user("ash@kanto.test")).await;
        assert_matches!(result, Err(AppError::Core(CoreError::Conflict(_))));

        let all = directory.find_all().await.unwrap();
        assert_eq!(all.iter().filter(|u| u.email == "ash@kanto.test").count(), 1);
    }

    #[tokio::test]
    async fn find_all_lists_newest_first() {
        let directory = directory();
        directory.create(new_user("first@kanto.test")).await.unwrap();
        directory.create(new_user("second@kanto.test")).await.unwrap();

        let emails: Vec<String> = directory
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["second@kanto.test", "first@kanto.test"]);
    }

    #[tokio::test]
    async fn update_with_password_rehashes() {
        let directory = directory();
        let user = directory.create(new_user("ash@kanto.test")).await.unwrap();
        let before = stored_hash(&directory, "ash@kanto.test").await;

        let changes = UserChanges {
            password: Some("newpass".to_string()),
            ..Default::default()
        };
        directory.update(user.id, changes).await.unwrap();

        let after = stored_hash(&directory, "ash@kanto.test").await.unwrap();
        assert_ne!(Some(after.clone()), before);
        assert!(crate::auth::password::verify_password("newpass", &after).unwrap());
    }

    #[tokio::test]
    async fn update_without_password_keeps_hash() {
        let directory = directory();
        let user = directory.create(new_user("ash@kanto.test")).await.unwrap();
        let before = stored_hash(&directory, "ash@kanto.test").await;

        let changes = UserChanges {
            name: Some("X".to_string()),
            ..Default::default()
        };
        let updated = directory.update(user.id, changes).await.unwrap();

        assert_eq!(updated.name, "X");
        assert_eq!(stored_hash(&directory, "ash@kanto.test").await, before);
    }

    #[tokio::test]
    async fn update_to_taken_email_conflicts() {
        let directory = directory();
        directory.create(new_user("ash@kanto.test")).await.unwrap();
        let misty = directory.create(new_user("misty@kanto.test")).await.unwrap();

        let changes = UserChanges {
            email: Some("ash@kanto.test".to_string()),
            ..Default::default()
        };
        assert_matches!(
            directory.update(misty.id, changes).await,
            Err(AppError::Core(CoreError::Conflict(_)))
        );
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let directory = directory();

        assert_matches!(
            directory.find_one(99).await,
            Err(AppError::Core(CoreError::NotFound { id: 99, .. }))
        );
        assert_matches!(
            directory.update(99, UserChanges::default()).await,
            Err(AppError::Core(CoreError::NotFound { id: 99, .. }))
        );
        assert_matches!(
            directory.remove(99).await,
            Err(AppError::Core(CoreError::NotFound { id: 99, .. }))
        );
    }

    #[tokio::test]
    async fn remove_deletes_record() {
        let directory = directory();
        let user = directory.create(new_user("ash@kanto.test")).await.unwrap();

        directory.remove(user.id).await.unwrap();
        assert!(directory.find_by_email("ash@kanto.test").await.unwrap().is_none());
    }

    #[test]
    fn new_user_validation_rules() {
        let mut input = new_user("not-an-email");
        assert!(input.validate().is_err());

        input.email = "ok@kanto.test".to_string();
        input.password = "short".to_string();
        assert!(input.validate().is_err());

        input.password = "sixsix".to_string();
        assert!(input.validate().is_ok());
    }
}
