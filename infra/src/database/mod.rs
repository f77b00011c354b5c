//! Database module
//!
//! This module provides the storage layer implementations including:
//! - Connection pool management and migrations
//! - The MySQL user repository
//! - An in-memory user repository

pub mod connection;
pub mod memory;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use memory::InMemoryUserRepository;
pub use mysql::MySqlUserRepository;
