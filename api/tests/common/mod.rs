//! Shared setup for API integration tests: an app state wired entirely
//! with the in-memory repository mocks.

// Not every test binary touches every helper
#![allow(dead_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use actix_web::web;

use chirpy_api::app::AppState;
use chirpy_core::repositories::{MockChirpRepository, MockTokenRepository, MockUserRepository};
use chirpy_core::services::auth::{AuthService, AuthServiceConfig};
use chirpy_core::services::token::{TokenService, TokenServiceConfig};
use chirpy_shared::config::Environment;

pub const POLKA_KEY: &str = "f271c81ff7084ee5b99a5091b42d486e";
pub const JWT_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockUserRepository, MockTokenRepository, MockChirpRepository>;

/// Builds an app state backed by fresh in-memory repositories
pub fn test_state(environment: Environment) -> web::Data<TestState> {
    let user_repository = Arc::new(MockUserRepository::new());
    let chirp_repository = Arc::new(MockChirpRepository::new());
    let token_repository = MockTokenRepository::new();

    let token_service = Arc::new(TokenService::new(
        token_repository,
        TokenServiceConfig::new(JWT_SECRET),
    ));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        token_service,
        AuthServiceConfig::new(POLKA_KEY),
    ));

    web::Data::new(AppState {
        auth_service,
        user_repository,
        chirp_repository,
        hits: Arc::new(AtomicU64::new(0)),
        environment,
    })
}
