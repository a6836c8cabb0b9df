//! Chirp entity and body validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Maximum allowed chirp length in bytes
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words that are masked out of chirp bodies before persisting
const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

/// A short text post authored by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Unique identifier for the chirp
    pub id: Uuid,

    /// The author's user id
    pub user_id: Uuid,

    /// Post body, already validated and cleaned
    pub body: String,

    /// Timestamp when the chirp was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the chirp was last updated
    pub updated_at: DateTime<Utc>,
}

impl Chirp {
    /// Creates a new Chirp with a freshly generated id
    pub fn new(user_id: Uuid, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validates a chirp body before it is accepted.
///
/// A body must be non-empty and at most [`MAX_CHIRP_LENGTH`] bytes.
pub fn validate_body(body: &str) -> Result<(), ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::ChirpEmpty);
    }
    if body.len() > MAX_CHIRP_LENGTH {
        return Err(ValidationError::ChirpTooLong { length: body.len() });
    }
    Ok(())
}

/// Masks banned words in a chirp body with `****`.
///
/// Matching is case-insensitive on whole whitespace-separated words, so
/// punctuation-adjacent occurrences pass through untouched.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if BANNED_WORDS
                .iter()
                .any(|banned| word.eq_ignore_ascii_case(banned))
            {
                "****"
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
