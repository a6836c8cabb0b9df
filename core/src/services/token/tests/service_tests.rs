//! Unit tests for the token service

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService<MockTokenRepository> {
    service_with_repo(MockTokenRepository::new())
}

fn service_with_repo(repo: MockTokenRepository) -> TokenService<MockTokenRepository> {
    TokenService::new(repo, TokenServiceConfig::new("unit-test-secret"))
}

/// Decodes an access token without going through the service under test
fn decode_claims(token: &str, secret: &str) -> Claims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims
}

/// Signs arbitrary claims with the unit-test secret
fn sign_claims(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"unit-test-secret"),
    )
    .unwrap()
}

#[test]
fn test_access_token_roundtrip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.generate_access_token(user_id, None).unwrap();
    assert_eq!(service.verify_access_token(&token).unwrap(), user_id);
}

#[test]
fn test_wrong_secret_fails_with_invalid_signature() {
    let service = service();
    let other = TokenService::new(
        MockTokenRepository::new(),
        TokenServiceConfig::new("a-different-secret"),
    );

    let token = service
        .generate_access_token(Uuid::new_v4(), None)
        .unwrap();
    assert!(matches!(
        other.verify_access_token(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_expired_token_fails_with_expired() {
    let service = service();
    let mut claims = Claims::new(Uuid::new_v4(), 1);
    claims.iat = (Utc::now() - Duration::seconds(3)).timestamp();
    claims.exp = (Utc::now() - Duration::seconds(2)).timestamp();

    let token = sign_claims(&claims);
    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::Expired))
    ));
}

#[test]
fn test_garbage_token_fails_with_malformed() {
    let service = service();
    assert!(matches!(
        service.verify_access_token("definitely.not.a-jwt"),
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[test]
fn test_unsigned_token_is_rejected() {
    // A token asserting alg "none" must never verify
    let service = service();
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        serde_json::to_string(&Claims::new(Uuid::new_v4(), 3600)).unwrap(),
    );
    let token = format!("{header}.{claims}.");

    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::Malformed))
    ));
}

#[test]
fn test_foreign_algorithm_is_rejected() {
    // Same shape as a real JWT, but signed (allegedly) with RS256
    let service = service();
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = URL_SAFE_NO_PAD.encode(
        serde_json::to_string(&Claims::new(Uuid::new_v4(), 3600)).unwrap(),
    );
    let token = format!("{header}.{claims}.AAAA");

    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_non_uuid_subject_fails_with_invalid_subject() {
    let service = service();
    let mut claims = Claims::new(Uuid::new_v4(), 3600);
    claims.sub = "not-a-user-id".to_string();

    let token = sign_claims(&claims);
    assert!(matches!(
        service.verify_access_token(&token),
        Err(DomainError::Token(TokenError::InvalidSubject))
    ));
}

#[test]
fn test_requested_ttl_is_clamped_to_maximum() {
    let service = service();
    let token = service
        .generate_access_token(Uuid::new_v4(), Some(999_999_999))
        .unwrap();

    let claims = decode_claims(&token, "unit-test-secret");
    assert_eq!(
        claims.exp - claims.iat,
        TokenServiceConfig::default().access_token_max_ttl_secs
    );
}

#[test]
fn test_shorter_requested_ttl_is_honored() {
    let service = service();
    let token = service
        .generate_access_token(Uuid::new_v4(), Some(60))
        .unwrap();

    let claims = decode_claims(&token, "unit-test-secret");
    assert_eq!(claims.exp - claims.iat, 60);
}

#[test]
fn test_non_positive_ttl_falls_back_to_default() {
    let service = service();
    let token = service
        .generate_access_token(Uuid::new_v4(), Some(0))
        .unwrap();

    let claims = decode_claims(&token, "unit-test-secret");
    assert_eq!(
        claims.exp - claims.iat,
        TokenServiceConfig::default().access_token_ttl_secs
    );
}

#[tokio::test]
async fn test_refresh_tokens_are_unique_hex() {
    let service = service();
    let user_id = Uuid::new_v4();

    let first = service.issue_refresh_token(user_id).await.unwrap();
    let second = service.issue_refresh_token(user_id).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(first.len(), 64);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_lookup_unknown_token_fails_with_not_found() {
    let service = service();
    assert!(matches!(
        service.lookup_refresh_token("no-such-token").await,
        Err(DomainError::Token(TokenError::NotFound))
    ));
}

#[tokio::test]
async fn test_refresh_returns_new_access_token_for_same_user() {
    let service = service();
    let user_id = Uuid::new_v4();

    let refresh_token = service.issue_refresh_token(user_id).await.unwrap();
    let (access_token, subject) = service.refresh_access_token(&refresh_token).await.unwrap();

    assert_eq!(subject, user_id);
    assert_eq!(service.verify_access_token(&access_token).unwrap(), user_id);
}

#[tokio::test]
async fn test_revoked_token_row_survives_but_is_unusable() {
    let service = service();
    let refresh_token = service.issue_refresh_token(Uuid::new_v4()).await.unwrap();

    service.revoke_refresh_token(&refresh_token).await.unwrap();

    let row = service.lookup_refresh_token(&refresh_token).await.unwrap();
    assert!(row.revoked_at.is_some());
    assert!(!row.is_usable());

    assert!(matches!(
        service.refresh_access_token(&refresh_token).await,
        Err(DomainError::Token(TokenError::Revoked))
    ));
}

#[tokio::test]
async fn test_double_revoke_is_idempotent() {
    let service = service();
    let refresh_token = service.issue_refresh_token(Uuid::new_v4()).await.unwrap();

    service.revoke_refresh_token(&refresh_token).await.unwrap();
    let first = service
        .lookup_refresh_token(&refresh_token)
        .await
        .unwrap()
        .revoked_at;

    service.revoke_refresh_token(&refresh_token).await.unwrap();
    let second = service
        .lookup_refresh_token(&refresh_token)
        .await
        .unwrap()
        .revoked_at;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_revoking_unknown_token_fails_with_not_found() {
    let service = service();
    assert!(matches!(
        service.revoke_refresh_token("no-such-token").await,
        Err(DomainError::Token(TokenError::NotFound))
    ));
}

#[tokio::test]
async fn test_expired_refresh_token_fails_with_expired() {
    let repo = MockTokenRepository::new();
    let service = service_with_repo(repo.clone());

    // Plant a row that expired a second ago for a known raw value
    let raw = "a".repeat(64);
    let mut row = RefreshToken::new(Uuid::new_v4(), TokenService::<MockTokenRepository>::hash_token(&raw));
    row.expires_at = Utc::now() - Duration::seconds(1);
    repo.save_refresh_token(row).await.unwrap();

    assert!(matches!(
        service.refresh_access_token(&raw).await,
        Err(DomainError::Token(TokenError::Expired))
    ));
}
