//! Configuration for the token service

use crate::domain::entities::token::{
    ACCESS_TOKEN_DEFAULT_TTL_SECS, ACCESS_TOKEN_MAX_TTL_SECS, REFRESH_TOKEN_EXPIRY_DAYS,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Default access token lifetime in seconds
    pub access_token_ttl_secs: i64,
    /// Upper bound for client-requested access token lifetimes in seconds
    pub access_token_max_ttl_secs: i64,
    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_ttl_secs: ACCESS_TOKEN_DEFAULT_TTL_SECS,
            access_token_max_ttl_secs: ACCESS_TOKEN_MAX_TTL_SECS,
            refresh_token_expiry_days: REFRESH_TOKEN_EXPIRY_DAYS,
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with the given signing secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}
