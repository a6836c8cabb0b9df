use actix_web::{web, HttpResponse};
use std::sync::atomic::Ordering;

use chirpy_core::errors::DomainError;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for POST /admin/reset
///
/// Resets the hit counter and, on a development platform only, deletes
/// every user. Anywhere else the destructive part is refused.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Hits reset to 0"
/// }
/// ```
///
/// ## Errors
/// - 403 Forbidden: Not running on a development platform
pub async fn reset<U, T, C>(state: web::Data<AppState<U, T, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    state.hits.store(0, Ordering::Relaxed);

    if !state.environment.is_development() {
        return handle_domain_error(&DomainError::Forbidden);
    }

    match state.user_repository.delete_all().await {
        Ok(count) => {
            log::info!("admin reset deleted {count} users");
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Hits reset to 0"
            }))
        }
        Err(error) => handle_domain_error(&error),
    }
}
