//! DTOs for the session endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chirpy_core::domain::value_objects::AuthResponse;

/// Request body for POST /api/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Optional access token lifetime hint; values above the server
    /// maximum are clamped
    pub expires_in_seconds: Option<i64>,
}

/// Response body for POST /api/login.
///
/// Carries the identity payload plus both tokens; there is deliberately
/// no password field of any kind.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub email: String,
    pub is_chirpy_red: bool,
    pub token: String,
    pub refresh_token: String,
}

impl From<AuthResponse> for LoginResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            id: response.id,
            email: response.email,
            is_chirpy_red: response.is_chirpy_red,
            token: response.token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Response body for POST /api/refresh
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}
