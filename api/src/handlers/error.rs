//! Translation of domain failures into the JSON error envelope.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ca_core::errors::{DomainError, ErrorKind};
use ca_shared::error_codes;
use ca_shared::types::ApiResponse;
use validator::ValidationErrors;

/// Error returned by every handler
///
/// Carries only what the client may see. Internal causes are logged when
/// the error is built from a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Machine-readable code placed in the envelope's `error` field
    pub fn code(&self) -> &'static str {
        match self.kind {
            ErrorKind::Validation => error_codes::VALIDATION_ERROR,
            ErrorKind::Conflict => error_codes::CONFLICT_ERROR,
            ErrorKind::NotFound => error_codes::NOT_FOUND_ERROR,
            ErrorKind::InvalidCredentials => error_codes::INVALID_CREDENTIALS_ERROR,
            ErrorKind::Unauthorized => error_codes::UNAUTHORIZED_ERROR,
            ErrorKind::Internal => error_codes::INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let kind = error.kind();
        if kind == ErrorKind::Internal {
            tracing::error!(error = %error, "request failed");
        } else {
            tracing::debug!(error = %error, "request rejected");
        }
        Self::new(kind, error.client_message())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect();
        messages.sort();
        Self::validation(messages.join("; "))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidCredentials | ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::error(
            status.as_u16(),
            self.code(),
            self.message.clone(),
        ))
    }
}
