//! Translation of domain errors into HTTP responses.
//!
//! This is the single place where the internal error taxonomy meets the
//! wire. Authentication failures of every flavor collapse into one
//! generic 401 body, so a caller cannot tell an unknown email from a bad
//! password, or an expired token from a revoked or malformed one.
//! Storage and internal errors are logged in full and answered with a
//! generic 500.

use actix_web::HttpResponse;

use chirpy_core::errors::{AuthError, DomainError, ErrorResponse};

/// Convert a domain error into the HTTP response the client sees.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new(
                "invalid_credentials",
                "Incorrect email or password",
            ))
        }
        DomainError::Auth(AuthError::UserAlreadyExists) => HttpResponse::Conflict().json(
            ErrorResponse::new("user_already_exists", "A user with that email already exists"),
        ),
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "User not found"))
        }
        DomainError::Auth(auth_error) => {
            log::debug!("authentication failure: {auth_error}");
            unauthorized()
        }
        DomainError::Token(token_error) => {
            log::debug!("token rejected: {token_error}");
            unauthorized()
        }
        DomainError::ValidationErr(validation_error) => {
            HttpResponse::BadRequest().json(ErrorResponse::from(validation_error.clone()))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("invalid_request", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),
        DomainError::Forbidden => {
            HttpResponse::Forbidden().json(ErrorResponse::new("forbidden", "Forbidden"))
        }
        DomainError::Storage { message } => {
            log::error!("storage error: {message}");
            internal_error()
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {message}");
            internal_error()
        }
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", "Unauthorized"))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ErrorResponse::new("internal_error", "Something went wrong"))
}
