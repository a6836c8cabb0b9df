//! Error types for authentication, token management, and validation.
//!
//! Every local crypto or parsing failure is converted into one of these
//! variants before it crosses the crate boundary. The API layer maps them
//! once to a stable wire format; raw library error text never reaches an
//! external caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately indistinguishable
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Authorization header missing")]
    MissingAuthorization,

    #[error("Invalid authorization header format")]
    MalformedAuthorization,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("User not found")]
    UserNotFound,

    #[error("A user with that email already exists")]
    UserAlreadyExists,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Token subject is not a valid user id")]
    InvalidSubject,

    #[error("Token revoked")]
    Revoked,

    #[error("Unknown refresh token")]
    NotFound,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Chirp body must not be empty")]
    ChirpEmpty,

    #[error("Chirp is too long")]
    ChirpTooLong { length: usize },
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::MalformedAuthorization => "MALFORMED_AUTHORIZATION",
            AuthError::InvalidApiKey => "INVALID_API_KEY",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::Malformed => "MALFORMED_TOKEN",
            TokenError::InvalidSubject => "INVALID_SUBJECT",
            TokenError::Revoked => "TOKEN_REVOKED",
            TokenError::NotFound => "TOKEN_NOT_FOUND",
            TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let error_code = match &err {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::ChirpEmpty => "CHIRP_EMPTY",
            ValidationError::ChirpTooLong { .. } => "CHIRP_TOO_LONG",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
