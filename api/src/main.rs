//! Chirpy API server entry point.

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::info;

use chirpy_api::app::{create_app, AppState};
use chirpy_api::config::ApiConfig;
use chirpy_core::services::auth::{AuthService, AuthServiceConfig};
use chirpy_core::services::token::{TokenService, TokenServiceConfig};
use chirpy_infra::{DatabasePool, MySqlChirpRepository, MySqlTokenRepository, MySqlUserRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Chirpy API server");

    // Missing secrets are a fatal startup condition
    let config = ApiConfig::from_env().expect("invalid configuration");

    let db = DatabasePool::new(&config.database)
        .await
        .expect("failed to connect to database");
    db.health_check().await.expect("database is unreachable");

    // Repositories share the connection pool
    let user_repository = Arc::new(MySqlUserRepository::new(db.pool()));
    let chirp_repository = Arc::new(MySqlChirpRepository::new(db.pool()));
    let token_repository = MySqlTokenRepository::new(db.pool());

    let token_service = Arc::new(TokenService::new(
        token_repository,
        TokenServiceConfig {
            jwt_secret: config.auth.jwt_secret.clone(),
            access_token_ttl_secs: config.auth.access_token_ttl_secs,
            access_token_max_ttl_secs: config.auth.access_token_max_ttl_secs,
            refresh_token_expiry_days: config.auth.refresh_token_expiry_days,
        },
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        token_service,
        AuthServiceConfig::new(config.auth.polka_key.clone()),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        user_repository,
        chirp_repository,
        hits: Arc::new(AtomicU64::new(0)),
        environment: config.environment,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(bind_address)?
        .run()
        .await
}
