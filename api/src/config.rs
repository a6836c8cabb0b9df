//! Environment-driven configuration for the API process.

use anyhow::{ensure, Context};
use std::env;

use chirpy_shared::config::{AuthConfig, DatabaseConfig, Environment, ServerConfig};

/// Full configuration for the API process, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Database pool settings
    pub database: DatabaseConfig,
    /// Session and webhook secrets
    pub auth: AuthConfig,
    /// Deployment environment (controls the admin reset endpoint)
    pub environment: Environment,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` and `POLKA_KEY` must be present and non-empty; the
    /// process must not come up without them.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        ensure!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        let polka_key = env::var("POLKA_KEY").context("POLKA_KEY must be set")?;
        ensure!(!polka_key.is_empty(), "POLKA_KEY must not be empty");

        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid port number")?;

        Ok(Self {
            server: ServerConfig::new(host, port),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::new(jwt_secret, polka_key),
            environment: Environment::from_env(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Serialized because the tests mutate process-wide environment state
    use std::sync::Mutex;
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            "JWT_SECRET",
            "POLKA_KEY",
            "SERVER_HOST",
            "SERVER_PORT",
            "PLATFORM",
            "ENVIRONMENT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_missing_jwt_secret_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("POLKA_KEY", "k");

        assert!(ApiConfig::from_env().is_err());
    }

    #[test]
    fn test_empty_polka_key_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("JWT_SECRET", "s");
        env::set_var("POLKA_KEY", "");

        assert!(ApiConfig::from_env().is_err());
    }

    #[test]
    fn test_complete_environment_loads() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var("JWT_SECRET", "s");
        env::set_var("POLKA_KEY", "k");
        env::set_var("PLATFORM", "dev");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.environment.is_development());
        assert!(config.auth.has_secrets());
    }
}
