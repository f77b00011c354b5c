//! Shared utilities and common types for the Course App server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded once from the environment
//! - The response envelope used by every API endpoint
//! - Error codes shared between the domain and presentation layers

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, ServerConfig,
    StorageBackend,
};
pub use errors::error_codes;
pub use types::{ApiResponse, HealthResponse, HealthStatus};
