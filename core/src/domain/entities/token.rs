//! Token entities for the session lifecycle.
//!
//! Access tokens are stateless signed JWTs; refresh tokens are opaque
//! random values stored server-side (only a hash of the value is kept).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime (1 hour)
pub const ACCESS_TOKEN_DEFAULT_TTL_SECS: i64 = 3600;

/// Upper bound for client-requested access token lifetimes.
///
/// Clients may ask for a shorter expiry; anything above this is clamped so
/// that access tokens stay short-lived.
pub const ACCESS_TOKEN_MAX_TTL_SECS: i64 = 3600;

/// Refresh token lifetime (60 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "chirpy";

/// Claims structure for the access token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for an access token expiring `ttl_secs` from now
    pub fn new(user_id: Uuid, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user id from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database.
///
/// The opaque token value itself is returned to the client exactly once;
/// rows hold a SHA-256 hash of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token row
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// Hash of the opaque token value
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp of revocation, if the token has been revoked.
    ///
    /// Once set it is never cleared; there is no un-revoke.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Creates a new refresh token valid for [`REFRESH_TOKEN_EXPIRY_DAYS`]
    pub fn new(user_id: Uuid, token_hash: String) -> Self {
        Self::with_expiry_days(user_id, token_hash, REFRESH_TOKEN_EXPIRY_DAYS)
    }

    /// Creates a new refresh token valid for the given number of days
    pub fn with_expiry_days(user_id: Uuid, token_hash: String, days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::days(days),
            revoked_at: None,
        }
    }

    /// Checks if the refresh token has passed its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A token is usable iff it has not been revoked and has not expired
    pub fn is_usable(&self) -> bool {
        self.revoked_at.is_none() && !self.is_expired()
    }

    /// Revokes the token.
    ///
    /// Idempotent: revoking an already-revoked token keeps the original
    /// revocation timestamp.
    pub fn revoke(&mut self) {
        if self.revoked_at.is_none() {
            self.revoked_at = Some(Utc::now());
        }
    }
}
