//! Token repository trait defining the interface for refresh token persistence.
//!
//! Rows store a hash of the opaque token value, never the value itself.
//! Validity semantics (expired/revoked checks) live in the token service;
//! the repository only persists and retrieves state.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token row
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed (duplicate hash or storage failure)
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token row by the hash of its value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Row found (it may still be revoked or expired)
    /// * `Ok(None)` - No row with that hash
    /// * `Err(DomainError::Storage)` - Persistence failure
    async fn find_refresh_token(&self, token_hash: &str)
        -> Result<Option<RefreshToken>, DomainError>;

    /// Mark a refresh token as revoked.
    ///
    /// Idempotent: revoking an already-revoked token succeeds without
    /// touching the original revocation timestamp.
    ///
    /// # Returns
    /// * `Ok(true)` - A row with that hash exists (revoked now or earlier)
    /// * `Ok(false)` - No row with that hash
    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError>;
}
