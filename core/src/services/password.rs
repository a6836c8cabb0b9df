//! Password hashing with Argon2id.
//!
//! Each hash carries its own random salt, so hashing the same password
//! twice yields different strings. Verification is delegated to the
//! `argon2` crate, which compares digests in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{DomainError, DomainResult};

/// Hashes a password with Argon2id and a per-call random salt.
pub fn hash_password(password: &str) -> DomainResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {e}"),
        })
}

/// Verifies a password against a stored hash.
///
/// Returns `Ok(false)` on a mismatch; an `Err` only signals a malformed
/// stored hash, which is a server-side defect rather than a caller error.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| DomainError::Internal {
        message: format!("malformed password hash: {e}"),
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
