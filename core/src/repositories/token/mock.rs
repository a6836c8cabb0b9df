//! In-memory implementation of TokenRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// Mock token repository backed by a shared in-memory map keyed by hash.
///
/// Clones share the same backing store.
#[derive(Clone)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored rows, revoked and expired ones included
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// True when no rows are stored
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        match tokens.get_mut(token_hash) {
            Some(token) => {
                token.revoke();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
