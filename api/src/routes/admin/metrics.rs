use actix_web::{web, HttpResponse};
use std::sync::atomic::Ordering;

use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};

use crate::app::AppState;

/// Handler for GET /admin/metrics
///
/// Renders the request hit counter as a small HTML page.
pub async fn metrics<U, T, C>(state: web::Data<AppState<U, T, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    let hits = state.hits.load(Ordering::Relaxed);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>"
        ))
}
