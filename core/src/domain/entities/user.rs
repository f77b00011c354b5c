//! User entity representing a registered account.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as persisted by the store
///
/// Deliberately not `Serialize`: the password hash and the refresh token
/// never leave the server. Use [`User::profile`] for anything sent to clients.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique, lowercased login name
    pub username: String,

    /// Unique, lowercased email address
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Contact number as supplied at signup
    pub phone_number: String,

    /// Refresh token issued at the last login, if any
    pub refresh_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance from an already-hashed password
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone_number: phone_number.into(),
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored refresh token
    pub fn set_refresh_token(&mut self, refresh_token: Option<String>) {
        self.refresh_token = refresh_token;
        self.updated_at = Utc::now();
    }

    /// Checks whether `token` is the refresh token currently anchored on this user
    pub fn holds_refresh_token(&self, token: &str) -> bool {
        self.refresh_token.as_deref().is_some_and(|stored| {
            constant_time_eq::constant_time_eq(stored.as_bytes(), token.as_bytes())
        })
    }

    /// Projection safe to return to clients
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Client-facing view of a user, without password or refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("alice", "a@x.com", "$2b$04$hash", "123")
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample_user();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.phone_number, "123");
        assert!(user.refresh_token.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_profile_omits_secrets() {
        let mut user = sample_user();
        user.set_refresh_token(Some("refresh.jwt.value".to_string()));

        let json = serde_json::to_value(user.profile()).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(json["username"], "alice");
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("refresh_token"));
    }

    #[test]
    fn test_holds_refresh_token() {
        let mut user = sample_user();
        assert!(!user.holds_refresh_token("anything"));

        user.set_refresh_token(Some("current".to_string()));
        assert!(user.holds_refresh_token("current"));
        assert!(!user.holds_refresh_token("previous"));

        user.set_refresh_token(None);
        assert!(!user.holds_refresh_token("current"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut user = sample_user();
        user.set_refresh_token(Some("refresh.jwt.value".to_string()));

        let rendered = format!("{:?}", user);
        assert!(!rendered.contains("$2b$04$hash"));
        assert!(!rendered.contains("refresh.jwt.value"));
    }
}
