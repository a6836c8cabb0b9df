use actix_web::{web, HttpResponse};

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;
use crate::dto::chirp::ChirpResponse;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /api/chirps
///
/// Lists all chirps, oldest first. No authentication required.
pub async fn list_chirps<U, T, C>(state: web::Data<AppState<U, T, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    match state.chirp_repository.find_all().await {
        Ok(chirps) => HttpResponse::Ok().json(
            chirps
                .into_iter()
                .map(ChirpResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}
