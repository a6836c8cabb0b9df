//! In-memory implementation of UserRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository backed by a shared in-memory map.
///
/// Clones share the same backing store, so a test can keep a handle while
/// the service under test owns another.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with an existing user
    pub async fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.write().await.insert(user.id, user);
        repo
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::Auth(AuthError::UserNotFound)),
        }
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.upgrade_to_chirpy_red();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let mut users = self.users.write().await;
        let count = users.len() as u64;
        users.clear();
        Ok(count)
    }
}
