//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// Authentication configuration consumed by the session services.
///
/// Both secrets are process-wide and immutable once loaded. Rotating the
/// JWT secret invalidates every outstanding access token immediately;
/// refresh tokens are opaque database rows and survive a rotation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key material for signing access tokens (HMAC)
    pub jwt_secret: String,

    /// Shared API key for the Polka billing webhook
    pub polka_key: String,

    /// Default access token lifetime in seconds
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_secs: i64,

    /// Upper bound for client-requested access token lifetimes in seconds
    #[serde(default = "default_access_token_ttl")]
    pub access_token_max_ttl_secs: i64,

    /// Refresh token lifetime in days
    #[serde(default = "default_refresh_token_days")]
    pub refresh_token_expiry_days: i64,
}

impl AuthConfig {
    /// Create a new authentication configuration with the two required secrets
    pub fn new(jwt_secret: impl Into<String>, polka_key: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            polka_key: polka_key.into(),
            access_token_ttl_secs: default_access_token_ttl(),
            access_token_max_ttl_secs: default_access_token_ttl(),
            refresh_token_expiry_days: default_refresh_token_days(),
        }
    }

    /// Set the default access token lifetime in seconds
    pub fn with_access_token_ttl(mut self, secs: i64) -> Self {
        self.access_token_ttl_secs = secs;
        self
    }

    /// Set the refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check whether both secrets are present
    pub fn has_secrets(&self) -> bool {
        !self.jwt_secret.is_empty() && !self.polka_key.is_empty()
    }
}

fn default_access_token_ttl() -> i64 {
    3600 // 1 hour
}

fn default_refresh_token_days() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_defaults() {
        let config = AuthConfig::new("secret", "polka");
        assert_eq!(config.access_token_ttl_secs, 3600);
        assert_eq!(config.access_token_max_ttl_secs, 3600);
        assert_eq!(config.refresh_token_expiry_days, 60);
        assert!(config.has_secrets());
    }

    #[test]
    fn test_missing_secret_detected() {
        let config = AuthConfig::new("", "polka");
        assert!(!config.has_secrets());
    }
}
