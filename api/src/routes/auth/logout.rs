use actix_web::{web, HttpResponse};
use ca_core::repositories::UserRepository;
use ca_shared::types::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use super::cookies::clear_session_cookies;
use super::AppState;

/// Handler for POST /logout
///
/// Requires an access token (cookie or `Authorization: Bearer`). Clears the
/// stored refresh token and expires both session cookies.
pub async fn logout<U>(
    state: web::Data<AppState<U>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    state.auth_service.logout(auth.user_id).await?;

    let mut response = HttpResponse::Ok();
    clear_session_cookies(&mut response);

    Ok(response.json(ApiResponse::<()>::empty(200, "User logged out successfully")))
}
