//! Authentication route handlers
//!
//! This module contains all account endpoints:
//! - Signup
//! - Login (sets the session cookies)
//! - Token refresh
//! - Logout

pub mod cookies;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod signup;

use std::sync::Arc;

use ca_core::repositories::UserRepository;
use ca_core::services::{
    AuthService, AuthServiceConfig, TokenCodec, TokenService, TokenServiceConfig,
};
use ca_shared::config::AuthConfig;

/// Application state that holds shared services
pub struct AppState<U: UserRepository> {
    pub auth_service: Arc<AuthService<U>>,
}

impl<U: UserRepository> AppState<U> {
    /// Wire the token and auth services over one repository
    pub fn new(repository: Arc<U>, auth: &AuthConfig) -> Self {
        let token_service = Arc::new(TokenService::new(
            repository.clone(),
            TokenServiceConfig::from(&auth.jwt),
        ));
        let auth_service = Arc::new(AuthService::new(
            repository,
            token_service,
            AuthServiceConfig::from(auth),
        ));
        Self { auth_service }
    }

    /// Codec handed to the authentication middleware
    pub fn token_codec(&self) -> TokenCodec {
        self.auth_service.token_service().codec().clone()
    }
}
