use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::domain::entities::chirp::{clean_body, validate_body, Chirp};
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::chirp::{ChirpResponse, CreateChirpRequest};
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/chirps
///
/// Creates a chirp authored by the authenticated user. The body must be
/// non-empty and at most 140 characters; banned words are masked before
/// the chirp is stored.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
///
/// # Request Body
///
/// ```json
/// {
///     "body": "Hello, Chirpy!"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created): the stored chirp
///
/// ## Errors
/// - 400 Bad Request: Empty or overlong body
/// - 401 Unauthorized: Missing or invalid access token
pub async fn create_chirp<U, T, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, C>>,
    request: web::Json<CreateChirpRequest>,
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

    if let Err(error) = validate_body(&request.body) {
        return handle_domain_error(&error.into());
    }

    let chirp = Chirp::new(user_id, clean_body(&request.body));
    match state.chirp_repository.create(chirp).await {
        Ok(chirp) => HttpResponse::Created().json(ChirpResponse::from(chirp)),
        Err(error) => handle_domain_error(&error),
    }
}
