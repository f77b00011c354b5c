//! Access token authentication for protected endpoints.
//!
//! The token is read from the `accessToken` cookie, falling back to an
//! `Authorization: Bearer` header. A verified token becomes an
//! [`AuthContext`] in the request extensions; anything else is answered
//! with a 401 envelope before the handler runs.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError};
use ca_core::domain::AccessClaims;
use ca_core::errors::{DomainError, TokenError};
use ca_core::services::TokenCodec;
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::handlers::ApiError;
use crate::routes::auth::cookies::ACCESS_TOKEN_COOKIE;

/// Identity of the caller, injected by [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    /// JWT ID of the presented access token
    pub jti: String,
}

impl AuthContext {
    pub fn from_claims(claims: AccessClaims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidAccessToken))?;
        Ok(Self {
            user_id,
            email: claims.email,
            username: claims.username,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
///
/// Verifies with the [`TokenCodec`] registered as app data.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let context = match authenticate(&req) {
                Ok(context) => context,
                Err(error) => {
                    let response = error.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(context);

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthContext, ApiError> {
    let token = extract_access_token(req)
        .ok_or_else(|| ApiError::from(DomainError::Token(TokenError::MissingToken)))?;

    let codec = req.app_data::<web::Data<TokenCodec>>().ok_or_else(|| {
        ApiError::from(DomainError::Internal {
            message: "token codec not registered".to_string(),
        })
    })?;

    let claims = codec.verify_access(&token).map_err(DomainError::Token)?;
    Ok(AuthContext::from_claims(claims)?)
}

/// Cookie first, then `Authorization: Bearer`
fn extract_access_token(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(ACCESS_TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    extract_bearer_token(req)
}

fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::Token(TokenError::MissingToken)));

        ready(result)
    }
}
