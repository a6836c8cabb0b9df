//! Environment configuration module

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    Development,
    /// Staging/test environment
    Staging,
    /// Production environment
    Production,
}

impl Environment {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Get environment from the PLATFORM or ENVIRONMENT variable
    pub fn from_env() -> Self {
        env::var("PLATFORM")
            .or_else(|_| env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| String::from("production"))
            .parse()
            .unwrap_or(Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "staging" | "test" => Ok(Environment::Staging),
            "prod" | "production" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_names() {
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("DEV".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert!("chaos".parse::<Environment>().is_err());
    }

    #[test]
    fn test_development_check() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }
}
