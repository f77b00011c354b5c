pub mod auth;

pub use auth::{LoginRequest, LoginResponse, RefreshTokenRequest, SignupRequest, TokenResponse};
