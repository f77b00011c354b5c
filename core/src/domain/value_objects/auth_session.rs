//! Result of a successful login.

use crate::domain::entities::{TokenPair, UserProfile};

/// Sanitized user record plus the freshly issued token pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Profile read back after the refresh token was persisted
    pub user: UserProfile,

    pub tokens: TokenPair,
}

impl AuthSession {
    pub fn new(user: UserProfile, tokens: TokenPair) -> Self {
        Self { user, tokens }
    }
}
