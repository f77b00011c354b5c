//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, ErrorKind, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Category used to pick the HTTP status and error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Database { .. } | DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => err.kind(),
            DomainError::Token(err) => err.kind(),
        }
    }

    /// Message that is safe to show to a client
    ///
    /// Storage and internal failures collapse to a generic message; their
    /// detail only goes to the log.
    pub fn client_message(&self) -> String {
        match self {
            DomainError::Validation { message } => message.clone(),
            DomainError::NotFound { resource } => format!("{} not found", resource),
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                "Internal server error".to_string()
            }
            DomainError::Auth(err) => err.to_string(),
            DomainError::Token(err) => err.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
