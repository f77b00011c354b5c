//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the storage engine behind the domain
//! boundary. Implementations must enforce uniqueness of both `email` and
//! `username` atomically with the insert, so that two concurrent signups
//! for the same identity cannot both succeed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use ca_core::repositories::UserRepository;
/// use ca_core::domain::entities::user::User;
/// use ca_core::errors::DomainError;
///
/// struct DocumentUserRepository {
///     // client handle
/// }
///
/// #[async_trait]
/// impl UserRepository for DocumentUserRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_email(&self, _: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_by_email_or_username(
/// #       &self,
/// #       _: &str,
/// #       _: &str,
/// #   ) -> Result<Option<User>, DomainError> {
/// #       Ok(None)
/// #   }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn update_refresh_token(
/// #       &self,
/// #       _: Uuid,
/// #       _: Option<&str>,
/// #   ) -> Result<bool, DomainError> {
/// #       Ok(true)
/// #   }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by exact (already normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find any user whose email equals `email` OR whose username equals `username`
    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Insert a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Auth(AuthError::UserAlreadyExists))` - Email or username taken
    /// * `Err(DomainError)` - Any other storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite the stored refresh token, or clear it with `None`
    ///
    /// # Returns
    /// * `Ok(true)` - The user existed and was updated
    /// * `Ok(false)` - No user with that ID
    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<&str>,
    ) -> Result<bool, DomainError>;
}
