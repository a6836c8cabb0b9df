//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Shared secret expected from the Polka billing webhook
    pub polka_key: String,
}

impl AuthServiceConfig {
    /// Create a configuration with the given webhook key
    pub fn new(polka_key: impl Into<String>) -> Self {
        Self {
            polka_key: polka_key.into(),
        }
    }
}
