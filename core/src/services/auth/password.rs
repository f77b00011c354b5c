//! bcrypt password hashing
//!
//! Hashing is CPU-bound, so both operations run on the blocking pool
//! instead of the async worker threads.

use crate::errors::DomainError;

/// Hash `password` with a fresh salt at the given cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("password hashing task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
}

/// Check `password` against a stored bcrypt hash
///
/// A malformed stored hash is an internal error, not a credential mismatch.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, DomainError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("password verification task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("secret", 4).await.unwrap();

        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("secret", &hash).await.unwrap());
        assert!(!verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hash_is_salted() {
        let first = hash_password("secret", 4).await.unwrap();
        let second = hash_password("secret", 4).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_internal_error() {
        let result = verify_password("secret", "not-a-bcrypt-hash").await;

        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }
}
