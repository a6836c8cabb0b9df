//! MySQL implementation of the TokenRepository trait.
//!
//! Rows hold a SHA-256 hash of the opaque token value; the raw value is
//! never written to the database. Revocation is a one-way update of the
//! `revoked_at` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::token::RefreshToken;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::TokenRepository;

use super::storage_error;

/// MySQL implementation of TokenRepository
pub struct MySqlTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    /// Create a new MySQL token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a RefreshToken entity
    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| storage_error("failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| storage_error("failed to get user_id", e))?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
                message: format!("invalid token UUID: {e}"),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Storage {
                message: format!("invalid user UUID: {e}"),
            })?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| storage_error("failed to get token_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("failed to get created_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| storage_error("failed to get expires_at", e))?,
            revoked_at: row
                .try_get::<Option<DateTime<Utc>>, _>("revoked_at")
                .map_err(|e| storage_error("failed to get revoked_at", e))?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, created_at, expires_at, revoked_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.revoked_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to save refresh token", e))?;

        Ok(token)
    }

    async fn find_refresh_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, created_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find refresh token", e))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn revoke_refresh_token(&self, token_hash: &str) -> Result<bool, DomainError> {
        // Only an unrevoked row is touched, so the original revocation
        // timestamp survives repeated revokes
        let query = r#"
            UPDATE refresh_tokens
            SET revoked_at = ?
            WHERE token_hash = ? AND revoked_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to revoke refresh token", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // Nothing updated: either the row is already revoked (fine) or it
        // does not exist at all
        let present: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM refresh_tokens WHERE token_hash = ?)")
                .bind(token_hash)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_error("failed to check refresh token existence", e))?;

        Ok(present == 1)
    }
}
