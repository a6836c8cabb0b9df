//! Credential extraction from the `Authorization` header.
//!
//! Two schemes are accepted and they are not interchangeable:
//! `Bearer <token>` for user-scoped tokens and `ApiKey <key>` for the
//! Polka webhook. Scheme matching is case-insensitive; the value must be
//! present after exactly one separating space.

use crate::errors::{AuthError, DomainError};

/// Extracts the token value from an `Authorization: Bearer <token>` header.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, DomainError> {
    extract_scheme(header, "bearer")
}

/// Extracts the key value from an `Authorization: ApiKey <key>` header.
pub fn extract_api_key(header: Option<&str>) -> Result<&str, DomainError> {
    extract_scheme(header, "apikey")
}

fn extract_scheme<'a>(header: Option<&'a str>, scheme: &str) -> Result<&'a str, DomainError> {
    let header = header.ok_or(AuthError::MissingAuthorization)?;

    let mut parts = header.splitn(2, ' ');
    let found_scheme = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("");

    if !found_scheme.eq_ignore_ascii_case(scheme) || value.is_empty() {
        return Err(AuthError::MalformedAuthorization.into());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(extract_bearer(Some("Bearer abc123")).unwrap(), "abc123");
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(extract_bearer(Some("bearer abc123")).unwrap(), "abc123");
        assert_eq!(extract_bearer(Some("BEARER abc123")).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header_is_distinct_error() {
        assert!(matches!(
            extract_bearer(None),
            Err(DomainError::Auth(AuthError::MissingAuthorization))
        ));
    }

    #[test]
    fn test_wrong_scheme_is_malformed() {
        assert!(matches!(
            extract_bearer(Some("Basic abc123")),
            Err(DomainError::Auth(AuthError::MalformedAuthorization))
        ));
    }

    #[test]
    fn test_empty_value_is_malformed() {
        assert!(matches!(
            extract_bearer(Some("Bearer ")),
            Err(DomainError::Auth(AuthError::MalformedAuthorization))
        ));
        assert!(matches!(
            extract_bearer(Some("Bearer")),
            Err(DomainError::Auth(AuthError::MalformedAuthorization))
        ));
    }

    #[test]
    fn test_api_key_extracted() {
        assert_eq!(extract_api_key(Some("ApiKey k-123")).unwrap(), "k-123");
    }

    #[test]
    fn test_schemes_are_not_interchangeable() {
        assert!(extract_api_key(Some("Bearer abc123")).is_err());
        assert!(extract_bearer(Some("ApiKey k-123")).is_err());
    }
}
