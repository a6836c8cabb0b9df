//! Chirp repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::chirp::Chirp;
use crate::errors::DomainError;

/// Repository trait for Chirp entity persistence operations
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Persist a new chirp
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError>;

    /// List all chirps, oldest first
    async fn find_all(&self) -> Result<Vec<Chirp>, DomainError>;

    /// Find a chirp by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError>;

    /// Delete a chirp, but only when `author_id` wrote it.
    ///
    /// # Returns
    /// * `Ok(true)` - Chirp deleted
    /// * `Ok(false)` - Chirp exists but belongs to someone else, or is gone
    async fn delete_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, DomainError>;
}
