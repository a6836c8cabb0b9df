use actix_web::{web, HttpRequest, HttpResponse};

use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::user::{UpdateUserRequest, UserResponse};
use crate::handlers::authorization_header;
use crate::handlers::error::handle_domain_error;

/// Handler for PUT /api/users
///
/// Updates the authenticated user's email and/or password. The acting
/// identity comes from the access token; at least one field must be
/// supplied.
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
///     "email": "new@example.com",
///     "password": "newpassword"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK): the updated user, without credential material
///
/// ## Errors
/// - 400 Bad Request: Neither email nor password supplied
/// - 401 Unauthorized: Missing or invalid access token
pub async fn update_user<U, T, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, C>>,
    request: web::Json<UpdateUserRequest>,
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

    if request.email.is_none() && request.password.is_none() {
        return handle_domain_error(&DomainError::Validation {
            message: "either email or password must be provided".to_string(),
        });
    }

    match state
        .auth_service
        .update_credentials(user_id, request.email.as_deref(), request.password.as_deref())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
