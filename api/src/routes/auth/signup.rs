use actix_web::{web, HttpResponse};
use ca_core::repositories::UserRepository;
use ca_shared::types::ApiResponse;
use validator::Validate;

use crate::dto::auth::{SignupRequest, MAX_PASSWORD_BYTES};
use crate::handlers::ApiError;

use super::AppState;

/// Handler for POST /signup
///
/// # Request Body
///
/// ```json
/// { "name": "alice", "email": "a@x.com", "password": "s3cret", "phoneNumber": "123" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
///
/// The envelope reports `200` while the HTTP status is `201`.
///
/// ```json
/// {
///     "status": 200,
///     "data": {
///         "id": "...",
///         "username": "alice",
///         "email": "a@x.com",
///         "phone_number": "123",
///         ...
///     },
///     "message": "User registered successfully",
///     "success": true
/// }
/// ```
///
/// ## Errors
/// - 400 `validation_error`: a field is missing, blank or too long
/// - 400 `conflict_error`: email or username already registered
/// - 500 `internal_error`: the new record could not be read back
pub async fn signup<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;
    if !request.password_within_limit() {
        return Err(ApiError::validation(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    let profile = state.auth_service.signup(request.into()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(
        200,
        profile,
        "User registered successfully",
    )))
}
