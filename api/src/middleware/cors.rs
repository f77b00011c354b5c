//! CORS middleware configuration for cross-origin requests.
//!
//! Session tokens travel in cookies, so a configured origin is allowed to
//! send credentials. An unset `CORS_ORIGIN` leaves the restrictive default
//! in place and only same-origin callers get through.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use ca_shared::config::ServerConfig;

const PREFLIGHT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance from the server configuration.
///
/// - `"*"`: any origin, without credentials
/// - any other value: that single origin, with credentials
/// - empty: no cross-origin access
pub fn create_cors(server: &ServerConfig) -> Cors {
    match server.allowed_origin() {
        Some("*") => {
            tracing::warn!("CORS configured to allow any origin; credentials disabled");
            base_cors().allow_any_origin()
        }
        Some(origin) => {
            tracing::info!(origin, "Configuring CORS for a single origin");
            base_cors().allowed_origin(origin).supports_credentials()
        }
        None => {
            tracing::info!("CORS_ORIGIN not set; cross-origin requests are rejected");
            Cors::default()
        }
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(PREFLIGHT_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    fn server_with_origin(origin: &str) -> ServerConfig {
        ServerConfig {
            cors_origin: origin.to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_configured_origin_is_allowed_with_credentials() {
        let cors = create_cors(&server_with_origin("https://app.example.com"));
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://app.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://app.example.com"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_unset_origin_does_not_grant_access() {
        let cors = create_cors(&server_with_origin(""));
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
