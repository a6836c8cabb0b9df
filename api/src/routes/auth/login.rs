use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/login
///
/// Authenticates a user and opens a session.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@example.com",
///     "password": "correcthorse",
///     "expires_in_seconds": 600
/// }
/// ```
///
/// `expires_in_seconds` is optional and clamped to the server maximum.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "a@example.com",
///     "is_chirpy_red": false,
///     "token": "eyJ...",
///     "refresh_token": "56aa826d..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password (indistinguishable)
/// - 500 Internal Server Error: Storage or token issuance failure
pub async fn login<U, T, C>(
    state: web::Data<AppState<U, T, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password, request.expires_in_seconds)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(LoginResponse::from(response)),
        Err(error) => handle_domain_error(&error),
    }
}
