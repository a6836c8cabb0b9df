use actix_web::{web, HttpResponse};
use validator::Validate;

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::user::{CreateUserRequest, UserResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /api/users
///
/// Registers a new account. The password is hashed before it is stored
/// and never appears in any response.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@example.com",
///     "password": "correcthorse"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "email": "a@example.com",
///     "is_chirpy_red": false,
///     "created_at": "2025-01-01T00:00:00Z",
///     "updated_at": "2025-01-01T00:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid email or empty password
/// - 409 Conflict: Email already registered
pub async fn create_user<U, T, C>(
    state: web::Data<AppState<U, T, C>>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_domain_error(&chirpy_core::errors::DomainError::Validation {
            message: errors.to_string(),
        });
    }

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
