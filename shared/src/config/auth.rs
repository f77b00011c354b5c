//! Authentication configuration

use std::fmt;

use super::{ConfigError, NonEmpty};

const DEFAULT_ACCESS_SECRET: &str = "access-secret-change-in-production";
const DEFAULT_REFRESH_SECRET: &str = "refresh-secret-change-in-production";
const DEFAULT_API_KEY: &str = "your_api_key";

/// JWT signing configuration for the access/refresh token pair
#[derive(Clone, PartialEq, Eq)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: DEFAULT_ACCESS_SECRET.to_string(),
            access_token_expiry: 900,      // 15 minutes
            refresh_secret: DEFAULT_REFRESH_SECRET.to_string(),
            refresh_token_expiry: 604_800, // 7 days
            issuer: String::from("course-app"),
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Check if either secret is still the built-in default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }

    pub(crate) fn from_lookup<F>(lookup: &NonEmpty<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let access_token_expiry =
            lookup.parse_or("ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry)?;
        let refresh_token_expiry =
            lookup.parse_or("REFRESH_TOKEN_EXPIRY", defaults.refresh_token_expiry)?;

        for (key, value) in [
            ("ACCESS_TOKEN_EXPIRY", access_token_expiry),
            ("REFRESH_TOKEN_EXPIRY", refresh_token_expiry),
        ] {
            if value <= 0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            access_secret: lookup.string_or("ACCESS_TOKEN_SECRET", DEFAULT_ACCESS_SECRET),
            access_token_expiry,
            refresh_secret: lookup.string_or("REFRESH_TOKEN_SECRET", DEFAULT_REFRESH_SECRET),
            refresh_token_expiry,
            issuer: defaults.issuer,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_secret", &"<redacted>")
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Key handed to integrating clients
    pub api_key: String,

    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            api_key: DEFAULT_API_KEY.to_string(),
            bcrypt_cost: 10,
        }
    }
}

impl AuthConfig {
    pub(crate) fn from_lookup<F>(lookup: &NonEmpty<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bcrypt_cost = lookup.parse_or("BCRYPT_COST", 10u32)?;
        // bcrypt accepts work factors 4..=31
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            jwt: JwtConfig::from_lookup(lookup)?,
            api_key: lookup.string_or("API_KEY", DEFAULT_API_KEY),
            bcrypt_cost,
        })
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt", &self.jwt)
            .field("api_key", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
