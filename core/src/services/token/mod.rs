//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 signing and verification of access and refresh tokens
//! - Issuing a token pair and anchoring the refresh token on the user record

mod codec;
mod config;
mod service;


pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::{IssueFailure, TokenService};
