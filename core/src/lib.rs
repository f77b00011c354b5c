//! # Course App Core
//!
//! Core business logic and domain layer for the Course App backend.
//! This crate contains the user entity, the token issuer, the signup/login
//! use-cases, the repository interface they persist through, and the error
//! taxonomy the presentation layer translates into HTTP responses.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AccessClaims, AuthSession, RefreshClaims, TokenPair, User, UserProfile};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::UserRepository;
pub use services::{
    AuthService, AuthServiceConfig, IssueFailure, LoginInput, SignupInput, TokenCodec,
    TokenService, TokenServiceConfig,
};
