//! In-memory implementation of ChirpRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::chirp::Chirp;
use crate::errors::DomainError;

use super::r#trait::ChirpRepository;

/// Mock chirp repository backed by a shared in-memory map.
///
/// Clones share the same backing store.
#[derive(Clone)]
pub struct MockChirpRepository {
    chirps: Arc<RwLock<HashMap<Uuid, Chirp>>>,
}

impl MockChirpRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            chirps: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockChirpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChirpRepository for MockChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        let mut chirps = self.chirps.write().await;
        chirps.insert(chirp.id, chirp.clone());
        Ok(chirp)
    }

    async fn find_all(&self) -> Result<Vec<Chirp>, DomainError> {
        let chirps = self.chirps.read().await;
        let mut all: Vec<Chirp> = chirps.values().cloned().collect();
        all.sort_by_key(|c| c.created_at);
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError> {
        let chirps = self.chirps.read().await;
        Ok(chirps.get(&id).cloned())
    }

    async fn delete_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, DomainError> {
        let mut chirps = self.chirps.write().await;
        match chirps.get(&id) {
            Some(chirp) if chirp.user_id == author_id => {
                chirps.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
