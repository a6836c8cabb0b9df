use actix_web::{web, HttpResponse};
use uuid::Uuid;

use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::chirp::ChirpResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /api/chirps/{id}
///
/// Fetches a single chirp by id. No authentication required.
///
/// # Errors
/// - 400 Bad Request: Malformed chirp id
/// - 404 Not Found: No chirp with that id
pub async fn get_chirp<U, T, C>(
    state: web::Data<AppState<U, T, C>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    let id = match Uuid::parse_str(&path) {
        Ok(id) => id,
        Err(_) => {
            return handle_domain_error(&DomainError::Validation {
                message: "invalid chirp id".to_string(),
            })
        }
    };

    match state.chirp_repository.find_by_id(id).await {
        Ok(Some(chirp)) => HttpResponse::Ok().json(ChirpResponse::from(chirp)),
        Ok(None) => handle_domain_error(&DomainError::NotFound {
            resource: "Chirp".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
