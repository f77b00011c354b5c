use actix_web::{web, HttpRequest, HttpResponse};
use ca_core::repositories::UserRepository;
use ca_shared::types::ApiResponse;

use crate::dto::auth::{RefreshTokenRequest, TokenResponse};
use crate::handlers::ApiError;

use super::cookies::{set_session_cookies, REFRESH_TOKEN_COOKIE};
use super::AppState;

/// Handler for POST /refresh-token
///
/// Reads the refresh token from the `refreshToken` cookie, or from the
/// `refreshToken` field of a JSON body when the cookie is absent, and
/// rotates the session to a fresh token pair.
///
/// ## Errors
/// - 401 `unauthorized_error`: token missing, invalid, or not the current one
/// - 500 `internal_error`: tokens could not be issued
pub async fn refresh_token<U>(
    req: HttpRequest,
    state: web::Data<AppState<U>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    let token = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| body.and_then(|body| body.into_inner().refresh_token));

    let tokens = state.auth_service.refresh(token.as_deref()).await?;

    let mut response = HttpResponse::Ok();
    set_session_cookies(&mut response, &tokens);

    Ok(response.json(ApiResponse::new(
        200,
        TokenResponse::from(tokens),
        "Access token refreshed",
    )))
}
