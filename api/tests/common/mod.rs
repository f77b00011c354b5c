//! Shared fixtures for the HTTP integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use ca_api::routes::auth::AppState;
use ca_infra::InMemoryUserRepository;
use ca_shared::config::{AuthConfig, JwtConfig};
use serde_json::{json, Value};

pub const PASSWORD: &str = "correct horse battery";

/// Lowest bcrypt cost keeps the suite fast
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new("test-access-secret", "test-refresh-secret"),
        api_key: "test-api-key".to_string(),
        bcrypt_cost: 4,
    }
}

pub fn test_state() -> (
    web::Data<AppState<InMemoryUserRepository>>,
    Arc<InMemoryUserRepository>,
) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let state = AppState::new(repository.clone(), &test_auth_config());
    (web::Data::new(state), repository)
}

pub fn signup_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": PASSWORD,
        "phoneNumber": "+1 555 0100",
    })
}

pub fn signup_request(name: &str, email: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/signup")
        .set_json(signup_body(name, email))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": email, "password": password }))
}

/// Cookies set on a response, keyed by name
pub fn response_cookies<B>(resp: &ServiceResponse<B>) -> HashMap<String, Cookie<'static>> {
    resp.response()
        .cookies()
        .map(|cookie| (cookie.name().to_string(), cookie.into_owned()))
        .collect()
}
