//! HS256 signing and verification for access and refresh tokens

use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::domain::entities::user::User;
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Stateless JWT codec
///
/// Access and refresh tokens are signed with separate secrets, so a token
/// of one kind never verifies as the other. Cloning is cheap enough to hand
/// a copy to request middleware.
#[derive(Clone)]
pub struct TokenCodec {
    issuer: String,
    access_ttl: i64,
    refresh_ttl: i64,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &TokenServiceConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;

        Self {
            issuer: config.issuer.clone(),
            access_ttl: config.access_token_expiry_seconds,
            refresh_ttl: config.refresh_token_expiry_seconds,
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Sign an access token carrying the user's id, email and username
    pub fn sign_access(&self, user: &User) -> Result<String, JwtError> {
        let claims = AccessClaims::for_user(user, &self.issuer, self.access_ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.access_encoding)
    }

    /// Sign a refresh token carrying only the user's id
    pub fn sign_refresh(&self, user: &User) -> Result<String, JwtError> {
        let claims = RefreshClaims::for_user(user, &self.issuer, self.refresh_ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.refresh_encoding)
    }

    /// Verify signature, issuer and expiry of an access token
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.access_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "access token rejected");
                TokenError::InvalidAccessToken
            })
    }

    /// Verify signature, issuer and expiry of a refresh token
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "refresh token rejected");
                TokenError::InvalidRefreshToken
            })
    }
}
