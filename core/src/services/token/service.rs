//! Main token service implementation

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshClaims, TokenPair};
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Why issuing a token pair failed
///
/// Callers that go through [`TokenService::issue_for_user`] only ever see the
/// generic issuance error; this type keeps the cause for logs and tests.
#[derive(Error, Debug)]
pub enum IssueFailure {
    #[error("user {0} not found")]
    UserNotFound(Uuid),

    #[error("user lookup failed: {0}")]
    Lookup(DomainError),

    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("refresh token persistence failed: {0}")]
    Persistence(DomainError),
}

/// Service for issuing and verifying JWT token pairs
pub struct TokenService<U: UserRepository> {
    repository: Arc<U>,
    codec: TokenCodec,
}

impl<U: UserRepository> TokenService<U> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - User repository the refresh token is anchored in
    /// * `config` - Token service configuration
    pub fn new(repository: Arc<U>, config: TokenServiceConfig) -> Self {
        Self {
            repository,
            codec: TokenCodec::new(&config),
        }
    }

    /// The signer/verifier, for callers that only need to check tokens
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issue an access/refresh pair for `user_id` and store the refresh token
    ///
    /// The refresh token replaces whatever was stored before, so only the
    /// most recently issued one can be redeemed.
    pub async fn try_issue(&self, user_id: Uuid) -> Result<TokenPair, IssueFailure> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(IssueFailure::Lookup)?
            .ok_or(IssueFailure::UserNotFound(user_id))?;

        let access_token = self.codec.sign_access(&user)?;
        let refresh_token = self.codec.sign_refresh(&user)?;

        let updated = self
            .repository
            .update_refresh_token(user.id, Some(&refresh_token))
            .await
            .map_err(IssueFailure::Persistence)?;
        if !updated {
            return Err(IssueFailure::UserNotFound(user_id));
        }

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Same as [`try_issue`](Self::try_issue), with every failure reported as
    /// [`AuthError::TokenIssuanceFailed`]
    pub async fn issue_for_user(&self, user_id: Uuid) -> Result<TokenPair, DomainError> {
        self.try_issue(user_id).await.map_err(|failure| {
            tracing::error!(user_id = %user_id, cause = %failure, "token issuance failed");
            DomainError::Auth(AuthError::TokenIssuanceFailed)
        })
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        self.codec.verify_refresh(token).map_err(DomainError::Token)
    }
}
