//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing, with switchable failure modes
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    fail_token_updates: AtomicBool,
    fail_reads: AtomicBool,
    hide_created: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_token_updates: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
            hide_created: AtomicBool::new(false),
        }
    }

    /// Make `update_refresh_token` return a database error
    pub fn set_fail_token_updates(&self, fail: bool) {
        self.fail_token_updates.store(fail, Ordering::SeqCst);
    }

    /// Make every lookup return a database error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Accept inserts without keeping them, so the read-back finds nothing
    pub fn set_hide_created(&self, hide: bool) {
        self.hide_created.store(hide, Ordering::SeqCst);
    }

    /// Seed a user directly
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Remove a user directly
    pub async fn remove(&self, id: Uuid) {
        self.users.write().await.remove(&id);
    }

    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    fn check_reads(&self) -> Result<(), DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "mock read failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.check_reads()?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_reads()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<User>, DomainError> {
        self.check_reads()?;
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email == email || u.username == username)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        if !self.hide_created.load(Ordering::SeqCst) {
            users.insert(user.id, user.clone());
        }
        Ok(user)
    }

    async fn update_refresh_token(
        &self,
        id: Uuid,
        refresh_token: Option<&str>,
    ) -> Result<bool, DomainError> {
        if self.fail_token_updates.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "mock write failure".to_string(),
            });
        }

        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.set_refresh_token(refresh_token.map(str::to_string));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
