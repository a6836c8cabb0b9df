use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::RefreshResponse;
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/refresh
///
/// Exchanges a refresh token for a new access token. The refresh token is
/// presented as a bearer credential and stays valid afterwards.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {refresh_token}
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, unknown, expired, or revoked refresh token
pub async fn refresh<U, T, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, C>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    match state.auth_service.refresh(authorization_header(&req)).await {
        Ok(token) => HttpResponse::Ok().json(RefreshResponse { token }),
        Err(error) => handle_domain_error(&error),
    }
}
