//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations.
///
/// Implementations must distinguish "row not found" (`Ok(None)` / `Ok(false)`)
/// from storage failures (`Err`); callers rely on that distinction to keep
/// 404-class outcomes separate from 500-class ones.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user
    /// * `Err(DomainError::Auth(UserAlreadyExists))` - Email already taken
    /// * `Err(DomainError::Storage)` - Persistence failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by email (the login name)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Replace a user's mutable fields (email, password hash, membership)
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::Auth(UserNotFound))` - No user with that id
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Grant the Chirpy Red membership to a user
    ///
    /// # Returns
    /// * `Ok(true)` - Membership granted
    /// * `Ok(false)` - No user with that id
    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every user. Development-only escape hatch behind the admin
    /// reset endpoint.
    async fn delete_all(&self) -> Result<u64, DomainError>;
}
