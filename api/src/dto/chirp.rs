//! DTOs for the chirp endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chirpy_core::domain::entities::chirp::Chirp;

/// Request body for POST /api/chirps
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Public view of a chirp
#[derive(Debug, Serialize, Deserialize)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            user_id: chirp.user_id,
            body: chirp.body,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
        }
    }
}
