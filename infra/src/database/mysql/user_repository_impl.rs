//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use chirpy_core::domain::entities::user::User;
use chirpy_core::errors::{AuthError, DomainError};
use chirpy_core::repositories::UserRepository;

use super::storage_error;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| storage_error("failed to get id", e))?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
                message: format!("invalid user UUID: {e}"),
            })?,
            email: row
                .try_get("email")
                .map_err(|e| storage_error("failed to get email", e))?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(|e| storage_error("failed to get hashed_password", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| storage_error("failed to get created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| storage_error("failed to get updated_at", e))?,
            is_chirpy_red: row
                .try_get("is_chirpy_red")
                .map_err(|e| storage_error("failed to get is_chirpy_red", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, hashed_password, created_at, updated_at, is_chirpy_red
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.is_chirpy_red)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Auth(AuthError::UserAlreadyExists))
            }
            Err(e) => Err(storage_error("failed to create user", e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find user by email", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, hashed_password, created_at, updated_at, is_chirpy_red
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, hashed_password = ?, updated_at = ?, is_chirpy_red = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.hashed_password)
            .bind(user.updated_at)
            .bind(user.is_chirpy_red)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Auth(AuthError::UserNotFound));
        }
        Ok(user)
    }

    async fn upgrade_to_chirpy_red(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET is_chirpy_red = TRUE, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to upgrade user", e))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        // MySQL reports zero affected rows for a no-op update, so check
        // whether the row exists before concluding the user is unknown
        let present: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
                .bind(id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_error("failed to check user existence", e))?;

        Ok(present == 1)
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("failed to delete users", e))?;

        tracing::warn!(count = result.rows_affected(), "deleted all users");
        Ok(result.rows_affected())
    }
}
