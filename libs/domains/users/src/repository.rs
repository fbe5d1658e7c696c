use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User};

/// Repository trait for User persistence.
///
/// Implementations enforce email uniqueness themselves and report a clash as
/// [`UserError::EmailAlreadyExists`]; the service's own lookup only gives the
/// early, friendlier answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Exact, case-sensitive email lookup
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// All users, ordered by id
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace the stored record with `user`
    async fn update(&self, user: User) -> UserResult<User>;

    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;

    /// `NotFound` if nothing was deleted
    async fn delete(&self, id: i64) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = user.with_id(id);
        users.insert(id, user.clone());

        tracing::debug!(user_id = id, "Stored user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id));
        }

        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        let users = self.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> UserResult<()> {
        let mut users = self.users.write().await;
        users.remove(&id).map(|_| ()).ok_or(UserError::NotFound(id))
    }
}
