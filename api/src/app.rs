//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! assembles the Actix-web application with all routes and middleware.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use chirpy_core::errors::ErrorResponse;
use chirpy_core::repositories::{ChirpRepository, TokenRepository, UserRepository};
use chirpy_core::services::auth::AuthService;
use chirpy_shared::config::Environment;

use crate::middleware::cors::create_cors;
use crate::middleware::metrics::RequestCounter;
use crate::routes::{admin, auth, chirps, users, webhooks};

/// Application state that holds shared services
pub struct AppState<U, T, C>
where
    U: UserRepository,
    T: TokenRepository,
    C: ChirpRepository,
{
    /// Session lifecycle and authorization checks
    pub auth_service: Arc<AuthService<U, T>>,
    /// User persistence, used by the user and webhook handlers
    pub user_repository: Arc<U>,
    /// Chirp persistence
    pub chirp_repository: Arc<C>,
    /// Request hit counter, observability only
    pub hits: Arc<AtomicU64>,
    /// Deployment environment; gates the admin reset endpoint
    pub environment: Environment,
}

/// Create and configure the application with all routes and middleware
pub fn create_app<U, T, C>(
    app_state: web::Data<AppState<U, T, C>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    C: ChirpRepository + 'static,
{
    let cors = create_cors();
    let counter = RequestCounter::new(Arc::clone(&app_state.hits));

    App::new()
        .app_data(app_state)
        // Middleware runs in reverse registration order, so the counter
        // sits outermost and sees every request
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(counter)
        .service(
            web::scope("/api")
                .route("/healthz", web::get().to(health_check))
                // Session lifecycle
                .route("/login", web::post().to(auth::login::login::<U, T, C>))
                .route("/refresh", web::post().to(auth::refresh::refresh::<U, T, C>))
                .route("/revoke", web::post().to(auth::revoke::revoke::<U, T, C>))
                // Users
                .route("/users", web::post().to(users::create::create_user::<U, T, C>))
                .route("/users", web::put().to(users::update::update_user::<U, T, C>))
                // Chirps
                .route("/chirps", web::post().to(chirps::create::create_chirp::<U, T, C>))
                .route("/chirps", web::get().to(chirps::list::list_chirps::<U, T, C>))
                .route("/chirps/{id}", web::get().to(chirps::get::get_chirp::<U, T, C>))
                .route(
                    "/chirps/{id}",
                    web::delete().to(chirps::delete::delete_chirp::<U, T, C>),
                )
                // Billing webhook
                .route(
                    "/polka/webhooks",
                    web::post().to(webhooks::polka::polka_webhook::<U, T, C>),
                ),
        )
        .service(
            web::scope("/admin")
                .route("/metrics", web::get().to(admin::metrics::metrics::<U, T, C>))
                .route("/reset", web::post().to(admin::reset::reset::<U, T, C>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("OK")
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not_found", "Resource not found"))
}
