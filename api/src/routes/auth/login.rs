use actix_web::{web, HttpResponse};
use ca_core::repositories::UserRepository;
use ca_shared::types::ApiResponse;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

use super::cookies::set_session_cookies;
use super::AppState;

/// Handler for POST /login
///
/// On success the token pair is returned in the body and also set as the
/// `accessToken` and `refreshToken` cookies (`HttpOnly`, `Secure`, `Path=/`).
///
/// ## Errors
/// - 400 `validation_error`: email missing or blank
/// - 404 `not_found_error`: no account for the email
/// - 401 `invalid_credentials_error`: wrong password
/// - 500 `internal_error`: tokens could not be issued
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    let session = state.auth_service.login(request.into_inner().into()).await?;

    let mut response = HttpResponse::Ok();
    set_session_cookies(&mut response, &session.tokens);

    Ok(response.json(ApiResponse::new(
        200,
        LoginResponse::from(session),
        "User logged in successfully",
    )))
}
