//! Integration tests for the refresh and revoke endpoints

mod common;

use actix_web::{http::header, test};
use serde_json::{json, Value};

use chirpy_api::app::create_app;
use chirpy_shared::config::Environment;

use common::test_state;

/// Registers a user and returns (access_token, refresh_token)
async fn register_and_login<S, B>(app: &S) -> (String, String)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({"email": "a@example.com", "password": "correcthorse"}))
        .to_request();
    test::call_service(app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "a@example.com", "password": "correcthorse"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;

    (
        body["token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
    )
}

#[actix_web::test]
async fn test_refresh_returns_fresh_access_token() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;
    let (_, refresh_token) = register_and_login(&app).await;

    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, format!("Bearer {refresh_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let new_token = body["token"].as_str().unwrap();
    assert!(!new_token.is_empty());

    // The refreshed token authorizes requests for the original user
    let req = test::TestRequest::post()
        .uri("/api/chirps")
        .insert_header((header::AUTHORIZATION, format!("Bearer {new_token}")))
        .set_json(json!({"body": "posted with a refreshed token"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
}

#[actix_web::test]
async fn test_refresh_requires_a_known_token() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;

    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", "0".repeat(64))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_refresh_without_header_is_unauthorized() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;

    let req = test::TestRequest::post().uri("/api/refresh").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_revoked_token_stops_refreshing() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;
    let (_, refresh_token) = register_and_login(&app).await;
    let auth = (header::AUTHORIZATION, format!("Bearer {refresh_token}"));

    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Revoking again still succeeds
    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
}

#[actix_web::test]
async fn test_revoking_unknown_token_fails() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;

    let req = test::TestRequest::post()
        .uri("/api/revoke")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", "0".repeat(64))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_access_token_is_not_a_refresh_token() {
    let app = test::init_service(create_app(test_state(Environment::Development))).await;
    let (access_token, _) = register_and_login(&app).await;

    // A signed JWT is not a stored opaque token and must not refresh
    let req = test::TestRequest::post()
        .uri("/api/refresh")
        .insert_header((header::AUTHORIZATION, format!("Bearer {access_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
