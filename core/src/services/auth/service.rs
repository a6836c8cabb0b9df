//! Main authentication service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::credentials::{extract_api_key, extract_bearer};
use crate::services::password::{hash_password, verify_password};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service owning the session lifecycle.
///
/// Every operation that takes an `authorization` parameter receives the
/// raw `Authorization` header value (or `None` when absent) and performs
/// its own credential extraction, so handlers stay thin.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for access and refresh tokens
    token_service: Arc<TokenService<T>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<T>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new user with a hashed password.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        let hashed_password = hash_password(password)?;
        let user = User::new(email, hashed_password);
        self.user_repository.create(user).await
    }

    /// Authenticate a user and open a new session.
    ///
    /// Unknown email and wrong password produce the same
    /// `InvalidCredentials` error so callers cannot probe which emails are
    /// registered. On success a signed access token (TTL clamped to the
    /// configured maximum) and a stored refresh token are issued; neither
    /// can be re-derived later.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        requested_ttl_secs: Option<i64>,
    ) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.hashed_password)? {
            tracing::debug!(user_id = %user.id, "password mismatch on login");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self
            .token_service
            .generate_access_token(user.id, requested_ttl_secs)?;
        let refresh_token = self.token_service.issue_refresh_token(user.id).await?;

        Ok(AuthResponse::new(&user, access_token, refresh_token))
    }

    /// Exchange the refresh token in a bearer header for a new access
    /// token. The refresh token itself is left in place, not rotated.
    pub async fn refresh(&self, authorization: Option<&str>) -> DomainResult<String> {
        let token = extract_bearer(authorization)?;
        let (access_token, user_id) = self.token_service.refresh_access_token(token).await?;
        tracing::debug!(user_id = %user_id, "access token refreshed");
        Ok(access_token)
    }

    /// Permanently revoke the refresh token in a bearer header.
    ///
    /// An unknown token fails the request rather than silently succeeding.
    pub async fn revoke(&self, authorization: Option<&str>) -> DomainResult<()> {
        let token = extract_bearer(authorization)?;
        self.token_service.revoke_refresh_token(token).await
    }

    /// Verify the access token in a bearer header and return the acting
    /// user id.
    ///
    /// Ownership checks beyond identity (for example "only the author may
    /// delete a chirp") are the caller's business.
    pub fn authorize(&self, authorization: Option<&str>) -> DomainResult<Uuid> {
        let token = extract_bearer(authorization)?;
        self.token_service.verify_access_token(token)
    }

    /// Check the API key header presented by the Polka webhook.
    ///
    /// The comparison is constant-time and not user-scoped.
    pub fn authorize_api_key(&self, authorization: Option<&str>) -> DomainResult<()> {
        let key = extract_api_key(authorization)?;
        if !constant_time_eq(key.as_bytes(), self.config.polka_key.as_bytes()) {
            return Err(AuthError::InvalidApiKey.into());
        }
        Ok(())
    }

    /// Update a user's email and/or password, re-hashing the password when
    /// one is supplied.
    pub async fn update_credentials(
        &self,
        user_id: Uuid,
        email: Option<&str>,
        password: Option<&str>,
    ) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(email) = email {
            user.set_email(email);
        }
        if let Some(password) = password {
            user.set_password_hash(hash_password(password)?);
        }

        self.user_repository.update(user).await
    }
}
