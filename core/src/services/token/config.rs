//! Configuration for the token service

use ca_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Value of the `iss` claim, checked on verification
    pub issuer: String,
    /// HS256 secret for access tokens
    pub access_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// HS256 secret for refresh tokens
    pub refresh_secret: String,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_seconds: i64,
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            issuer: jwt.issuer.clone(),
            access_secret: jwt.access_secret.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
            refresh_secret: jwt.refresh_secret.clone(),
            refresh_token_expiry_seconds: jwt.refresh_token_expiry,
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("issuer", &self.issuer)
            .field("access_secret", &"<redacted>")
            .field("access_token_expiry_seconds", &self.access_token_expiry_seconds)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_token_expiry_seconds", &self.refresh_token_expiry_seconds)
            .finish()
    }
}
