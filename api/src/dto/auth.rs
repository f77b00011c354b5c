use ca_core::domain::{AuthSession, TokenPair, UserProfile};
use ca_core::services::{LoginInput, SignupInput};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// bcrypt only reads the first 72 bytes of a password
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Body of `POST /signup`
///
/// Every field is optional at the JSON level so that a missing field and a
/// blank one produce the same "All fields are required" response.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
    #[validate(length(max = 64, message = "Name must be at most 64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: Option<String>,

    pub password: Option<String>,

    #[serde(rename = "phoneNumber")]
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub phone_number: Option<String>,
}

impl SignupRequest {
    pub fn password_within_limit(&self) -> bool {
        self.password
            .as_ref()
            .map_or(true, |password| password.len() <= MAX_PASSWORD_BYTES)
    }
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            phone_number: request.phone_number.unwrap_or_default(),
        }
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,

    pub password: Option<String>,

    /// Accepted for client compatibility, not used
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
}

impl From<LoginRequest> for LoginInput {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        }
    }
}

/// Body of `POST /refresh-token` when the cookie is absent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// `data` of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthSession> for LoginResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user,
            access_token: session.tokens.access_token,
            refresh_token: session.tokens.refresh_token,
        }
    }
}

/// `data` of a successful refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_field_names() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"name":"alice","email":"a@x.com","password":"s3cret","phoneNumber":"123"}"#,
        )
        .unwrap();

        assert_eq!(request.phone_number.as_deref(), Some("123"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_absent_and_null_fields_become_empty() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"name":"alice","email":null}"#).unwrap();
        let input = SignupInput::from(request);

        assert_eq!(input.name, "alice");
        assert_eq!(input.email, "");
        assert_eq!(input.password, "");
        assert_eq!(input.phone_number, "");
    }

    #[test]
    fn test_length_limits() {
        let request = SignupRequest {
            name: Some("a".repeat(65)),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SignupRequest {
            password: Some("é".repeat(40)),
            ..Default::default()
        };
        assert!(!request.password_within_limit());

        let request = SignupRequest {
            password: Some("p".repeat(72)),
            ..Default::default()
        };
        assert!(request.password_within_limit());
    }
}
