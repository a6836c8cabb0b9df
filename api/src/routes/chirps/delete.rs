use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for DELETE /api/chirps/{id}
///
/// Deletes a chirp. The session service only establishes who is acting;
/// the author check happens here, and someone else's chirp answers 403.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 400 Bad Request: Malformed chirp id
/// - 401 Unauthorized: Missing or invalid access token
/// - 403 Forbidden: Chirp belongs to another user
/// - 404 Not Found: No chirp with that id
pub async fn delete_chirp<U, T, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    let user_id = match state.auth_service.authorize(authorization_header(&req)) {
        Ok(user_id) => user_id,
        Err(error) => return handle_domain_error(&error),
    };

    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => {
            return handle_domain_error(&DomainError::Validation {
                message: "invalid chirp id".to_string(),
            })
        }
    };

    match state.chirp_repository.find_by_id(id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return handle_domain_error(&DomainError::NotFound {
                resource: "Chirp".to_string(),
            })
        }
        Err(error) => return handle_domain_error(&error),
    }

    match state.chirp_repository.delete_by_author(id, user_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(&DomainError::Forbidden),
        Err(error) => handle_domain_error(&error),
    }
}
