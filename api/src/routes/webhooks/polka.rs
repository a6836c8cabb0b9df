use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::webhook::PolkaWebhookPayload;
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/polka/webhooks
///
/// Receives billing events from Polka, authenticated by a shared API key
/// rather than a user token. Only `user.upgraded` has an effect; any
/// other event is acknowledged and ignored.
///
/// # Headers
///
/// ```text
/// Authorization: ApiKey {key}
/// ```
///
/// # Request Body
///
/// ```json
/// {
///     "event": "user.upgraded",
///     "data": { "user_id": "550e8400-e29b-41d4-a716-446655440000" }
/// }
/// ```
///
/// # Response
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 400 Bad Request: Malformed user id
/// - 401 Unauthorized: Missing or wrong API key
/// - 404 Not Found: Unknown user
pub async fn polka_webhook<U, T, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, C>>,
    payload: web::Json<PolkaWebhookPayload>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    if let Err(error) = state
        .auth_service
        .authorize_api_key(authorization_header(&req))
    {
        return handle_domain_error(&error);
    }

    if payload.event != "user.upgraded" {
        return HttpResponse::NoContent().finish();
    }

    let user_id = match Uuid::parse_str(&payload.data.user_id) {
        Ok(user_id) => user_id,
        Err(_) => {
            return handle_domain_error(&DomainError::Validation {
                message: "invalid user id".to_string(),
            })
        }
    };

    match state.user_repository.upgrade_to_chirpy_red(user_id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(&DomainError::NotFound {
            resource: "User".to_string(),
        }),
        Err(error) => handle_domain_error(&error),
    }
}
