//! UserRepository trait definition.

use chatest_types::error::RepositoryError;
use chatest_types::id::UserId;
use chatest_types::user::{CreateUser, ReadUser};

/// Repository trait for user persistence.
pub trait UserRepository: Send + Sync {
    /// Register a new user. Returns `Persistence` if the username is taken.
    fn create(
        &self,
        user: &CreateUser,
    ) -> impl std::future::Future<Output = Result<UserId, RepositoryError>> + Send;

    /// Fetch a user by id. Returns `NotFound` if absent.
    fn read(
        &self,
        id: &UserId,
    ) -> impl std::future::Future<Output = Result<ReadUser, RepositoryError>> + Send;
}
