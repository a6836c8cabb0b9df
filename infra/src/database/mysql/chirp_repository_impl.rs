//! MySQL implementation of the ChirpRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::chirp::Chirp;
use chirpy_core::errors::DomainError;
use chirpy_core::repositories::ChirpRepository;

use super::storage_error;

/// MySQL implementation of ChirpRepository
pub struct MySqlChirpRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlChirpRepository {
    /// Create a new MySQL chirp repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Chirp entity
    fn row_to_chirp(row: &sqlx::mysql::MySqlRow) -> Result<Chirp, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| storage_error("failed to get id", e))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| storage_error("failed to get user_id", e))?;

        Ok(Chirp {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
                message: format!("invalid chirp UUID: {e}"),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Storage {
                message: format!("invalid user UUID: {e}"),
            })?,
            body: row
                .try_get("body")
                .map_err(|e| storage_error("failed to get body", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| storage_error("failed to get updated_at", e))?,
        })
    }
}

#[async_trait]
impl ChirpRepository for MySqlChirpRepository {
    async fn create(&self, chirp: Chirp) -> Result<Chirp, DomainError> {
        let query = r#"
            INSERT INTO chirps (
                id, user_id, body, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(chirp.id.to_string())
            .bind(chirp.user_id.to_string())
            .bind(&chirp.body)
            .bind(chirp.created_at)
            .bind(chirp.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to create chirp", e))?;

        Ok(chirp)
    }

    async fn find_all(&self) -> Result<Vec<Chirp>, DomainError> {
        let query = r#"
            SELECT id, user_id, body, created_at, updated_at
            FROM chirps
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("failed to list chirps", e))?;

        rows.iter().map(Self::row_to_chirp).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, DomainError> {
        let query = r#"
            SELECT id, user_id, body, created_at, updated_at
            FROM chirps
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find chirp", e))?;

        row.as_ref().map(Self::row_to_chirp).transpose()
    }

    async fn delete_by_author(&self, id: Uuid, author_id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            DELETE FROM chirps
            WHERE id = ? AND user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(author_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to delete chirp", e))?;

        Ok(result.rows_affected() > 0)
    }
}
