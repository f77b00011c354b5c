//! Integration tests for the login endpoint and its session cookies

mod common;

use actix_web::test;
use ca_api::app::create_app;
use ca_api::routes::auth::cookies::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use ca_core::repositories::UserRepository;
use ca_shared::config::ServerConfig;
use common::{login_request, response_cookies, signup_request, test_state, PASSWORD};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_login_sets_secure_cookies_and_stores_refresh_token() {
    let (state, repository) = test_state();
    let app = test::init_service(create_app(state, &ServerConfig::default())).await;

    test::call_service(&app, signup_request("alice", "alice@example.com").to_request()).await;

    // Email lookup ignores case
    let resp = test::call_service(
        &app,
        login_request("Alice@Example.com", PASSWORD).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let cookies = response_cookies(&resp);
    for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
        let cookie = cookies.get(name).expect("session cookie set");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert!(!cookie.value().is_empty());
    }

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "User logged in successfully");
    assert_eq!(body["data"]["user"]["username"], "alice");
    assert!(body["data"]["user"].get("password_hash").is_none());
    assert_eq!(
        body["data"]["access_token"],
        cookies[ACCESS_TOKEN_COOKIE].value()
    );
    assert_eq!(
        body["data"]["refresh_token"],
        cookies[REFRESH_TOKEN_COOKIE].value()
    );

    let stored = repository
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.refresh_token.as_deref(),
        Some(cookies[REFRESH_TOKEN_COOKIE].value())
    );
}

#[actix_web::test]
async fn test_login_requires_email() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state, &ServerConfig::default())).await;

    for body in [json!({ "password": "pw" }), json!({ "email": "  ", "password": "pw" })] {
        let req = test::TestRequest::post().uri("/login").set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "Email is required");
    }
}

#[actix_web::test]
async fn test_login_unknown_email() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state, &ServerConfig::default())).await;

    let resp = test::call_service(
        &app,
        login_request("nobody@example.com", PASSWORD).to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
    assert!(response_cookies(&resp).is_empty());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found_error");
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let (state, repository) = test_state();
    let app = test::init_service(create_app(state, &ServerConfig::default())).await;

    test::call_service(&app, signup_request("alice", "alice@example.com").to_request()).await;

    let resp = test::call_service(
        &app,
        login_request("alice@example.com", "wrong").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
    assert!(response_cookies(&resp).is_empty());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials_error");
    assert_eq!(body["message"], "Invalid user credentials");

    let stored = repository
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(stored.refresh_token.is_none());
}
