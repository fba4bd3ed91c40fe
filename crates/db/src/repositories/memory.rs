//! In-process [`UserStore`] used by tests and database-less local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use pokeadmin_core::types::DbId;
use tokio::sync::RwLock;

use super::UserStore;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Users kept in a `BTreeMap` keyed by id, with ids handed out sequentially
/// from 1 like a `BIGSERIAL` column.
///
/// Email uniqueness is not enforced here; the user directory checks it
/// before inserting.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: DbId,
    users: BTreeMap<DbId, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: inner.next_id,
            email: input.email.clone(),
            name: input.name.clone(),
            password_hash: Some(input.password_hash.clone()),
            role: input.role.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            avatar: input.avatar.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, sqlx::Error> {
        Ok(self.inner.read().await.users.values().rev().cloned().collect())
    }

    async fn update(&self, id: DbId, input: &UpdateUser) -> Result<Option<User>, sqlx::Error> {
        let mut inner = self.inner.write().await;
        let Some(user) = inner.users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(email) = &input.email {
            user.email = email.clone();
        }
        if let Some(name) = &input.name {
            user.name = name.clone();
        }
        if let Some(hash) = &input.password_hash {
            user.password_hash = Some(hash.clone());
        }
        if let Some(role) = &input.role {
            user.role = role.clone();
        }
        if let Some(phone) = &input.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(address) = &input.address {
            user.address = Some(address.clone());
        }
        if let Some(avatar) = &input.avatar {
            user.avatar = Some(avatar.clone());
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.users.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
