//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing, password hashing and API key settings
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP listener and CORS configuration
//!
//! All values are read once at startup through [`AppConfig::from_env`].
//! Unset and empty variables both fall back to the literal defaults.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use std::str::FromStr;

use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::Environment;
pub use server::ServerConfig;

/// Errors raised while building the application configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unsupported database URL scheme: {scheme:?} (expected mysql:// or memory://)")]
    UnsupportedDatabase { scheme: String },
}

/// Complete application configuration combining all sub-configurations
///
/// Constructed exactly once in the binary and handed to the services that
/// need it; nothing reads the process environment after startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = NonEmpty(lookup);

        Ok(Self {
            environment: Environment::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
        })
    }
}

/// Lookup wrapper that treats empty values as unset
pub(crate) struct NonEmpty<F>(F);

impl<F> NonEmpty<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    pub(crate) fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub(crate) fn parse_or<T: FromStr>(
        &self,
        key: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
            None => Ok(default),
        }
    }
}
