//! Authentication service module
//!
//! This module provides the account use-cases:
//! - Signup with duplicate detection and bcrypt password hashing
//! - Login with password verification and token issuance
//! - Refresh token rotation
//! - Logout

mod config;
pub mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, LoginInput, SignupInput};
