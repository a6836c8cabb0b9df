//! User entity representing a registered Chirpy account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address used as the login name
    pub email: String,

    /// Argon2 hash of the user's password.
    ///
    /// Invariant: the hash never appears in an outbound response, so it is
    /// excluded from serialization entirely.
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Whether the user has an active Chirpy Red membership
    pub is_chirpy_red: bool,
}

impl User {
    /// Creates a new User with a freshly generated id
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            created_at: now,
            updated_at: now,
            is_chirpy_red: false,
        }
    }

    /// Replaces the email address
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, hashed_password: impl Into<String>) {
        self.hashed_password = hashed_password.into();
        self.updated_at = Utc::now();
    }

    /// Grants the Chirpy Red membership
    pub fn upgrade_to_chirpy_red(&mut self) {
        self.is_chirpy_red = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("a@example.com", "$argon2id$fakehash");
        assert_eq!(user.email, "a@example.com");
        assert!(!user.is_chirpy_red);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_upgrade_to_chirpy_red() {
        let mut user = User::new("a@example.com", "hash");
        user.upgrade_to_chirpy_red();
        assert!(user.is_chirpy_red);
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User::new("a@example.com", "super-secret-hash");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("super-secret-hash"));
        assert!(json.contains("a@example.com"));
    }

    #[test]
    fn test_set_email_touches_updated_at() {
        let mut user = User::new("a@example.com", "hash");
        let before = user.updated_at;
        user.set_email("b@example.com");
        assert_eq!(user.email, "b@example.com");
        assert!(user.updated_at >= before);
    }
}
