//! Database configuration module

use super::{ConfigError, NonEmpty};

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/my_database";
const DEFAULT_DATABASE_NAME: &str = "course-app";

/// Storage backend selected by the scheme of `DATABASE_URL`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// `mysql://` - pooled SQLx connection
    MySql,
    /// `memory://` - process-local store, lost on restart
    Memory,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Database used when the URL does not name one
    pub name: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            name: DEFAULT_DATABASE_NAME.to_string(),
            max_connections: 10,
            connect_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &NonEmpty<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            url: lookup.string_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            name: lookup.string_or("DB_NAME", DEFAULT_DATABASE_NAME),
            max_connections: lookup.parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            connect_timeout: lookup.parse_or("DATABASE_CONNECT_TIMEOUT", 30)?,
        })
    }

    /// Database to select: the URL path if present, otherwise `name`
    pub fn database_name(&self) -> &str {
        self.url
            .split_once("://")
            .and_then(|(_, rest)| rest.split_once('/'))
            .map(|(_, path)| path.split('?').next().unwrap_or_default())
            .filter(|path| !path.is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Resolve the storage backend from the URL scheme
    pub fn backend(&self) -> Result<StorageBackend, ConfigError> {
        let scheme = self
            .url
            .split_once("://")
            .map(|(scheme, _)| scheme.to_lowercase())
            .unwrap_or_default();

        match scheme.as_str() {
            "mysql" => Ok(StorageBackend::MySql),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnsupportedDatabase { scheme }),
        }
    }
}
