//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claims carried by a short-lived access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Email at the time of issuance
    pub email: String,

    /// Username at the time of issuance
    pub username: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID
    pub jti: String,
}

impl AccessClaims {
    /// Builds access claims for `user` expiring `ttl_seconds` from now
    pub fn for_user(user: &User, issuer: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the subject back into a user ID
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims carried by a long-lived refresh token
///
/// Only the subject is embedded. The `jti` keeps two tokens issued within
/// the same second distinct, which the single-slot rotation check relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub jti: String,
}

impl RefreshClaims {
    /// Builds refresh claims for `user` expiring `ttl_seconds` from now
    pub fn for_user(user: &User, issuer: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Access and refresh tokens issued together
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_embed_identity() {
        let user = User::new("alice", "a@x.com", "hash", "123");
        let claims = AccessClaims::for_user(&user, "course-app", 900);

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.iss, "course-app");
        assert_eq!(claims.exp - claims.iat, 900);
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[test]
    fn test_refresh_claims_are_unique_per_issue() {
        let user = User::new("alice", "a@x.com", "hash", "123");
        let first = RefreshClaims::for_user(&user, "course-app", 604_800);
        let second = RefreshClaims::for_user(&user, "course-app", 604_800);

        assert_eq!(first.sub, second.sub);
        assert_ne!(first.jti, second.jti);
        assert_eq!(first.exp - first.iat, 604_800);
    }

    #[test]
    fn test_malformed_subject() {
        let user = User::new("alice", "a@x.com", "hash", "123");
        let mut claims = RefreshClaims::for_user(&user, "course-app", 60);
        claims.sub = "not-a-uuid".to_string();

        assert!(claims.user_id().is_err());
    }
}
