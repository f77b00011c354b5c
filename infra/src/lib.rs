//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Course App backend.
//! It provides the concrete storage behind the `UserRepository` trait
//! defined in `ca_core`.
//!
//! ## Architecture
//!
//! - **MySQL**: pooled SQLx connection, embedded migrations and the
//!   production user repository
//! - **Memory**: a process-local user repository for development and tests

/// Database module - MySQL and in-memory user storage
pub mod database;

pub use database::{DatabasePool, InMemoryUserRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
