//! Database connection pool management
//!
//! Connection pooling uses SQLx with MySQL. All repositories share one
//! pool, which is safe for concurrent use from many request handlers.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use chirpy_core::errors::DomainError;
use chirpy_shared::config::DatabaseConfig;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
}

impl DatabasePool {
    /// Create a new database connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DomainError> {
        tracing::info!(
            max_connections = config.max_connections,
            "creating database connection pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::Storage {
                message: format!("failed to connect to database: {e}"),
            })?;

        Ok(Self { pool })
    }

    /// The underlying SQLx pool, cheap to clone per repository
    pub fn pool(&self) -> MySqlPool {
        self.pool.clone()
    }

    /// Verify the pool can reach the database
    pub async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::Storage {
                message: format!("database health check failed: {e}"),
            })
    }
}
