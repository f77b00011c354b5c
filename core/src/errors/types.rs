//! Error types for authentication and token handling.

use thiserror::Error;

/// Failure categories the presentation layer maps to status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    InvalidCredentials,
    Unauthorized,
    Internal,
}

/// Signup and login failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Email is required")]
    EmailRequired,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid user credentials")]
    InvalidCredentials,

    #[error("Something went wrong while signing up")]
    SignupFailed,

    #[error("Something went wrong while generating refresh token")]
    TokenIssuanceFailed,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields | AuthError::EmailRequired => ErrorKind::Validation,
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::SignupFailed | AuthError::TokenIssuanceFailed => ErrorKind::Internal,
        }
    }
}

/// Token verification and rotation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unauthorized request")]
    MissingToken,

    #[error("Invalid access token")]
    InvalidAccessToken,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token is expired or used")]
    StaleRefreshToken,
}

impl TokenError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Unauthorized
    }
}
