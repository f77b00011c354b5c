//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard response envelope used for both success and error bodies
///
/// ```json
/// { "status": 200, "data": { ... }, "message": "User logged in successfully", "success": true }
/// {
///     "status": 404,
///     "data": null,
///     "message": "User not found",
///     "success": false,
///     "error": "not_found_error"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Status code reported in the body; equals the HTTP status except on signup
    pub status: u16,

    /// Response payload, `null` on failure
    pub data: Option<T>,

    /// Human-readable message
    pub message: String,

    /// Whether the request was successful
    pub success: bool,

    /// Error kind code (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn new(status: u16, data: T, message: impl Into<String>) -> Self {
        Self {
            status,
            data: Some(data),
            message: message.into(),
            success: status < 400,
            error: None,
        }
    }

    /// Create a successful response without a payload
    pub fn empty(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: message.into(),
            success: status < 400,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    pub fn error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: message.into(),
            success: false,
            error: Some(code.into()),
        }
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::new(
            200,
            json!({"username": "alice"}),
            "User registered successfully",
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], 200);
        assert_eq!(value["data"]["username"], "alice");
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_keeps_null_data() {
        let response = ApiResponse::error(404, "not_found_error", "User not found");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], 404);
        assert!(value["data"].is_null());
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "not_found_error");
        assert_eq!(value["message"], "User not found");
    }
}
