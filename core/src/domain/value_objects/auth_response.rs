//! Authentication response value object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Result of a successful login.
///
/// Carries the user's public identity plus the freshly issued token pair.
/// Both token values are returned exactly once and cannot be re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user's id
    pub id: Uuid,

    /// The authenticated user's email
    pub email: String,

    /// Whether the user has an active Chirpy Red membership
    pub is_chirpy_red: bool,

    /// Signed access token (short-lived)
    pub token: String,

    /// Opaque refresh token (long-lived, revocable)
    pub refresh_token: String,
}

impl AuthResponse {
    /// Builds the response for a user and an issued token pair.
    ///
    /// The password hash stays behind; only public identity fields cross
    /// this boundary.
    pub fn new(user: &User, token: String, refresh_token: String) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_chirpy_red: user.is_chirpy_red,
            token,
            refresh_token,
        }
    }
}
