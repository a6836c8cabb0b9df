//! Unit tests for the authentication service

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{MockTokenRepository, MockUserRepository, TokenRepository};
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";

struct Harness {
    service: AuthService<MockUserRepository, MockTokenRepository>,
    token_repo: MockTokenRepository,
}

fn harness() -> Harness {
    let user_repo = Arc::new(MockUserRepository::new());
    let token_repo = MockTokenRepository::new();
    let token_service = Arc::new(TokenService::new(
        token_repo.clone(),
        TokenServiceConfig::new("unit-test-secret"),
    ));
    Harness {
        service: AuthService::new(
            user_repo,
            token_service,
            AuthServiceConfig::new(POLKA_KEY),
        ),
        token_repo,
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[tokio::test]
async fn test_login_returns_tokens_and_identity() {
    let h = harness();
    let user = h
        .service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();

    let response = h
        .service
        .login("a@example.com", "correcthorse", None)
        .await
        .unwrap();

    assert_eq!(response.id, user.id);
    assert_eq!(response.email, "a@example.com");
    assert!(!response.is_chirpy_red);
    assert!(!response.token.is_empty());
    assert_eq!(response.refresh_token.len(), 64);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let h = harness();
    h.service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();

    let wrong_password = h
        .service
        .login("a@example.com", "batterystaple", None)
        .await
        .unwrap_err();
    let unknown_email = h
        .service
        .login("nobody@example.com", "correcthorse", None)
        .await
        .unwrap_err();

    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_registering_duplicate_email_fails() {
    let h = harness();
    h.service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();

    let result = h.service.register("a@example.com", "other").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
}

#[tokio::test]
async fn test_authorize_binds_the_login_identity() {
    let h = harness();
    let user = h
        .service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();
    let response = h
        .service
        .login("a@example.com", "correcthorse", None)
        .await
        .unwrap();

    let subject = h.service.authorize(Some(&bearer(&response.token))).unwrap();
    assert_eq!(subject, user.id);
}

#[tokio::test]
async fn test_authorize_without_header_fails() {
    let h = harness();
    assert!(matches!(
        h.service.authorize(None),
        Err(DomainError::Auth(AuthError::MissingAuthorization))
    ));
}

#[tokio::test]
async fn test_refresh_issues_token_for_original_user() {
    let h = harness();
    let user = h
        .service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();
    let response = h
        .service
        .login("a@example.com", "correcthorse", None)
        .await
        .unwrap();

    let access_token = h
        .service
        .refresh(Some(&bearer(&response.refresh_token)))
        .await
        .unwrap();

    let subject = h.service.authorize(Some(&bearer(&access_token))).unwrap();
    assert_eq!(subject, user.id);
}

#[tokio::test]
async fn test_refresh_with_revoked_token_fails() {
    let h = harness();
    h.service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();
    let response = h
        .service
        .login("a@example.com", "correcthorse", None)
        .await
        .unwrap();

    let header = bearer(&response.refresh_token);
    h.service.revoke(Some(&header)).await.unwrap();

    assert!(matches!(
        h.service.refresh(Some(&header)).await,
        Err(DomainError::Token(TokenError::Revoked))
    ));
}

#[tokio::test]
async fn test_refresh_with_expired_token_fails() {
    let h = harness();

    // Plant a refresh token that expired a second ago
    let raw = "b".repeat(64);
    let mut row = RefreshToken::new(
        Uuid::new_v4(),
        TokenService::<MockTokenRepository>::hash_token(&raw),
    );
    row.expires_at = Utc::now() - Duration::seconds(1);
    h.token_repo.save_refresh_token(row).await.unwrap();

    assert!(matches!(
        h.service.refresh(Some(&bearer(&raw))).await,
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[tokio::test]
async fn test_revoking_unknown_token_is_an_error() {
    let h = harness();
    assert!(matches!(
        h.service.revoke(Some(&bearer(&"c".repeat(64)))).await,
        Err(DomainError::Token(TokenError::NotFound))
    ));
}

#[tokio::test]
async fn test_double_revoke_succeeds() {
    let h = harness();
    h.service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();
    let response = h
        .service
        .login("a@example.com", "correcthorse", None)
        .await
        .unwrap();

    let header = bearer(&response.refresh_token);
    h.service.revoke(Some(&header)).await.unwrap();
    h.service.revoke(Some(&header)).await.unwrap();
}

#[tokio::test]
async fn test_api_key_authorization() {
    let h = harness();

    assert!(h
        .service
        .authorize_api_key(Some(&format!("ApiKey {POLKA_KEY}")))
        .is_ok());

    assert!(matches!(
        h.service.authorize_api_key(Some("ApiKey wrong-key")),
        Err(DomainError::Auth(AuthError::InvalidApiKey))
    ));

    // A bearer token is not an API key
    assert!(matches!(
        h.service
            .authorize_api_key(Some(&format!("Bearer {POLKA_KEY}"))),
        Err(DomainError::Auth(AuthError::MalformedAuthorization))
    ));
}

#[tokio::test]
async fn test_update_credentials_rehashes_password() {
    let h = harness();
    let user = h
        .service
        .register("a@example.com", "correcthorse")
        .await
        .unwrap();

    h.service
        .update_credentials(user.id, Some("b@example.com"), Some("batterystaple"))
        .await
        .unwrap();

    // Old password no longer works, new one does, email changed
    assert!(h
        .service
        .login("b@example.com", "correcthorse", None)
        .await
        .is_err());
    let response = h
        .service
        .login("b@example.com", "batterystaple", None)
        .await
        .unwrap();
    assert_eq!(response.email, "b@example.com");
}

#[tokio::test]
async fn test_update_credentials_for_unknown_user_fails() {
    let h = harness();
    assert!(matches!(
        h.service
            .update_credentials(Uuid::new_v4(), Some("x@example.com"), None)
            .await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}
