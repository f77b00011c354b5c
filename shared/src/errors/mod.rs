//! Shared error codes

/// Error codes carried in the `error` field of failed responses
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const CONFLICT_ERROR: &str = "conflict_error";
    pub const NOT_FOUND_ERROR: &str = "not_found_error";
    pub const INVALID_CREDENTIALS_ERROR: &str = "invalid_credentials_error";
    pub const UNAUTHORIZED_ERROR: &str = "unauthorized_error";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
