//! ChatRepository trait definition.

use chatest_types::chat::{CreateChat, ReadChat};
use chatest_types::error::RepositoryError;
use chatest_types::id::{ChatId, UserId};

/// Repository trait for chat persistence.
///
/// Implementations live in chatest-infra (e.g., `SqliteChatRepository`) and
/// in [`crate::repository::memory`].
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Persist a new chat owned by `owner_id`.
    ///
    /// Returns `Persistence` if the store rejects the write, e.g. because
    /// the owner does not exist.
    fn create(
        &self,
        chat: &CreateChat,
        owner_id: &UserId,
    ) -> impl std::future::Future<Output = Result<ChatId, RepositoryError>> + Send;

    /// Fetch a chat by id. Returns `NotFound` if absent.
    fn read(
        &self,
        id: &ChatId,
    ) -> impl std::future::Future<Output = Result<ReadChat, RepositoryError>> + Send;
}
