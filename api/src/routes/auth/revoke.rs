use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/revoke
///
/// Permanently revokes the refresh token presented as a bearer credential.
/// There is no way to reinstate a revoked token.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {refresh_token}
/// ```
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 401 Unauthorized: Missing, malformed, or unknown token
pub async fn revoke<U, T, C>(req: HttpRequest, state: web::Data<AppState<U, T, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    match state.auth_service.revoke(authorization_header(&req)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
