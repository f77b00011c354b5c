//! Application state and factory
//!
//! This module wires the shared state into an Actix-web application and
//! provides the server loop used by the binary.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse, HttpServer, ResponseError};
use ca_core::repositories::UserRepository;
use ca_shared::config::{AppConfig, ServerConfig};
use ca_shared::types::HealthResponse;
use tracing_actix_web::TracingLogger;

use crate::handlers::ApiError;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{
    login::login, logout::logout, refresh::refresh_token, signup::signup, AppState,
};

const SERVICE_NAME: &str = "course-app-api";

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    server: &ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let codec = web::Data::new(app_state.token_codec());
    let cors = create_cors(server);

    // Malformed bodies get the same envelope as every other failure
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into());

    App::new()
        .app_data(app_state)
        .app_data(codec)
        .app_data(json_config)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .route("/signup", web::post().to(signup::<U>))
        .route("/login", web::post().to(login::<U>))
        .route("/refresh-token", web::post().to(refresh_token::<U>))
        .service(
            web::resource("/logout")
                .wrap(JwtAuth::new())
                .route(web::post().to(logout::<U>)),
        )
        .default_service(web::route().to(not_found))
}

/// Bind the listener and serve until shutdown
pub async fn run_server<U>(config: AppConfig, repository: Arc<U>) -> std::io::Result<()>
where
    U: UserRepository + 'static,
{
    let app_state = web::Data::new(AppState::new(repository, &config.auth));
    let server = config.server.clone();
    let bind_address = server.bind_address();

    tracing::info!(address = %bind_address, "Starting HTTP server");

    HttpServer::new(move || create_app(app_state.clone(), &server))
        .bind(&bind_address)?
        .run()
        .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

async fn not_found() -> HttpResponse {
    ApiError::not_found("The requested resource was not found").error_response()
}
