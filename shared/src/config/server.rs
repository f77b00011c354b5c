//! HTTP server configuration module

use super::{ConfigError, NonEmpty};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// HTTP listener and CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Single origin allowed to make credentialed cross-origin requests.
    /// Empty disables cross-origin access.
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: String::new(),
        }
    }
}

impl ServerConfig {
    pub(crate) fn from_lookup<F>(lookup: &NonEmpty<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup.string_or("HOST", DEFAULT_HOST),
            port: lookup.parse_or("PORT", DEFAULT_PORT)?,
            cors_origin: lookup.string_or("CORS_ORIGIN", ""),
        })
    }

    /// Address string suitable for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured CORS origin, or `None` when cross-origin access is disabled
    pub fn allowed_origin(&self) -> Option<&str> {
        let origin = self.cors_origin.trim();
        (!origin.is_empty()).then_some(origin)
    }
}
