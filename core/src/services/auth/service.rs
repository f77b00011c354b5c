//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{User, UserProfile};
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{hash_password, verify_password};

/// Fields collected at signup; absent fields arrive as empty strings
#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// Credentials presented at login
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Authentication service for signup, login, token rotation and logout
pub struct AuthService<U: UserRepository> {
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService<U>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<U>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<U>> {
        &self.token_service
    }

    /// Register a new account
    ///
    /// `name` becomes the username. Username and email are trimmed and
    /// lowercased before the duplicate check, so uniqueness is
    /// case-insensitive.
    ///
    /// # Returns
    ///
    /// * `Ok(UserProfile)` - The stored user, read back after the insert
    /// * `Err(AuthError::MissingFields)` - Any field blank after trimming
    /// * `Err(AuthError::UserAlreadyExists)` - Email or username taken
    /// * `Err(AuthError::SignupFailed)` - The insert could not be read back
    pub async fn signup(&self, input: SignupInput) -> DomainResult<UserProfile> {
        let fields = [
            &input.name,
            &input.email,
            &input.password,
            &input.phone_number,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AuthError::MissingFields.into());
        }

        let username = input.name.trim().to_lowercase();
        let email = input.email.trim().to_lowercase();

        if self
            .user_repository
            .find_by_email_or_username(&email, &username)
            .await?
            .is_some()
        {
            tracing::info!(username = %username, "signup rejected, user already exists");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(&input.password, self.config.bcrypt_cost).await?;
        let user = User::new(username, email, password_hash, input.phone_number.trim());

        // A concurrent signup can still win between the check and the insert;
        // the store's uniqueness guarantee reports that as UserAlreadyExists.
        let created = self.user_repository.create(user).await?;

        let stored = self
            .user_repository
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| {
                tracing::error!(user_id = %created.id, "created user could not be read back");
                DomainError::Auth(AuthError::SignupFailed)
            })?;

        tracing::info!(user_id = %stored.id, "user registered");
        Ok(stored.profile())
    }

    /// Authenticate by email and password and issue a token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Profile re-read after the refresh token was stored
    /// * `Err(AuthError::EmailRequired)` - Email blank
    /// * `Err(AuthError::UserNotFound)` - No account for the email
    /// * `Err(AuthError::InvalidCredentials)` - Password mismatch
    /// * `Err(AuthError::TokenIssuanceFailed)` - Any issuance failure
    pub async fn login(&self, input: LoginInput) -> DomainResult<AuthSession> {
        let email = input.email.trim();
        if email.is_empty() {
            return Err(AuthError::EmailRequired.into());
        }

        let user = self
            .user_repository
            .find_by_email(&email.to_lowercase())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(&input.password, &user.password_hash).await? {
            tracing::info!(user_id = %user.id, "login rejected, wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.token_service.issue_for_user(user.id).await?;

        let logged_in = self
            .user_repository
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: format!("user {} disappeared during login", user.id),
            })?;

        tracing::info!(user_id = %logged_in.id, "user logged in");
        Ok(AuthSession::new(logged_in.profile(), tokens))
    }

    /// Exchange the current refresh token for a new pair
    ///
    /// Only the most recently issued refresh token is accepted; a token that
    /// verifies but no longer matches the stored one has already been used.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> DomainResult<TokenPair> {
        let token = refresh_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(TokenError::MissingToken)?;

        let claims = self.token_service.verify_refresh_token(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| TokenError::InvalidRefreshToken)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        if !user.holds_refresh_token(token) {
            tracing::warn!(user_id = %user.id, "stale refresh token presented");
            return Err(TokenError::StaleRefreshToken.into());
        }

        self.token_service.issue_for_user(user.id).await
    }

    /// Clear the stored refresh token so it can no longer be redeemed
    ///
    /// Idempotent: logging out twice, or after the account is gone, succeeds.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        let cleared = self
            .user_repository
            .update_refresh_token(user_id, None)
            .await?;
        tracing::info!(user_id = %user_id, cleared, "user logged out");
        Ok(())
    }
}
