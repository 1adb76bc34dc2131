//! User registration service.

use chatest_types::error::ServiceError;
use chatest_types::id::UserId;
use chatest_types::user::{CreateUser, ReadUser};

use super::require_name;
use crate::repository::user::UserRepository;

/// Service for registering and looking up users.
pub struct UserService<U: UserRepository> {
    repo: U,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(repo: U) -> Self {
        Self { repo }
    }

    /// Register a user under a trimmed, non-empty username.
    #[tracing::instrument(skip(self, request))]
    pub async fn register(&self, request: CreateUser) -> Result<ReadUser, ServiceError> {
        let username = require_name("username", &request.username)?;
        let id = self.repo.create(&CreateUser { username }).await?;
        tracing::debug!(%id, "user registered");
        Ok(self.repo.read(&id).await?)
    }

    pub async fn get_user(&self, id: &UserId) -> Result<ReadUser, ServiceError> {
        Ok(self.repo.read(id).await?)
    }
}
