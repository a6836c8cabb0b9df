//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Number of random bytes in an opaque refresh token (256 bits of entropy)
const REFRESH_TOKEN_BYTES: usize = 32;

/// Service for issuing and verifying access tokens and managing the
/// stored refresh tokens backing them.
///
/// Access token verification is local and synchronous; only the refresh
/// token operations touch the repository.
pub struct TokenService<R: TokenRepository> {
    repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance.
    ///
    /// The signing algorithm is pinned to HS256; tokens asserting any other
    /// algorithm (including `none`) fail verification. Expiry is checked
    /// without leeway.
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for a user.
    ///
    /// `requested_ttl_secs` is a hint: values above the configured maximum
    /// are clamped and non-positive values fall back to the default, so a
    /// client can shorten its session but never extend it.
    pub fn generate_access_token(
        &self,
        user_id: Uuid,
        requested_ttl_secs: Option<i64>,
    ) -> Result<String, DomainError> {
        let ttl = requested_ttl_secs
            .filter(|secs| *secs > 0)
            .map(|secs| secs.min(self.config.access_token_max_ttl_secs))
            .unwrap_or(self.config.access_token_ttl_secs);

        let claims = Claims::new(user_id, ttl);
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Verifies an access token and returns the subject user id.
    ///
    /// No repository access happens here; validity is purely a function of
    /// the signature and the embedded expiry.
    pub fn verify_access_token(&self, token: &str) -> Result<Uuid, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                DomainError::Token(match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::InvalidAlgorithmName => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                })
            })?;

        token_data
            .claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidSubject))
    }

    /// Generates a fresh opaque refresh token for a user and persists it.
    ///
    /// The raw value is returned exactly once; only its hash is stored.
    pub async fn issue_refresh_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let refresh_token = RefreshToken::with_expiry_days(
            user_id,
            Self::hash_token(&token),
            self.config.refresh_token_expiry_days,
        );
        self.repository.save_refresh_token(refresh_token).await?;

        Ok(token)
    }

    /// Looks up the stored row for a raw refresh token value.
    ///
    /// The row is returned even when revoked or expired; callers decide
    /// what usability means for them.
    pub async fn lookup_refresh_token(&self, token: &str) -> Result<RefreshToken, DomainError> {
        self.repository
            .find_refresh_token(&Self::hash_token(token))
            .await?
            .ok_or(DomainError::Token(TokenError::NotFound))
    }

    /// Exchanges a usable refresh token for a new access token.
    ///
    /// The refresh token is consumed by reading, not rotated; the new
    /// access token always gets the default lifetime regardless of what
    /// the original login asked for.
    pub async fn refresh_access_token(&self, token: &str) -> Result<(String, Uuid), DomainError> {
        let refresh_token = self.lookup_refresh_token(token).await?;

        if refresh_token.revoked_at.is_some() {
            return Err(DomainError::Token(TokenError::Revoked));
        }
        if refresh_token.is_expired() {
            return Err(DomainError::Token(TokenError::Expired));
        }

        let access_token = self.generate_access_token(refresh_token.user_id, None)?;
        Ok((access_token, refresh_token.user_id))
    }

    /// Permanently revokes a refresh token.
    ///
    /// Unknown tokens are an error; revoking an already-revoked token is
    /// not.
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        let revoked = self
            .repository
            .revoke_refresh_token(&Self::hash_token(token))
            .await?;
        if !revoked {
            return Err(DomainError::Token(TokenError::NotFound));
        }
        Ok(())
    }

    /// Hex-encoded SHA-256 of a raw token value, the storage lookup key
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
