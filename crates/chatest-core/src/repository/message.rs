//! Message repository trait definition.
//!
//! Defines the storage interface for chat messages. The infrastructure layer
//! (chatest-infra) implements this trait with SQLite persistence.

use chatest_types::error::RepositoryError;
use chatest_types::id::{ChatId, MessageId, UserId};
use chatest_types::message::{CreateMessage, ReadMessage};

/// Repository trait for message persistence.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait MessageRepository: Send + Sync {
    /// Persist a new message in `chat_id`, attributed to `author_id`.
    ///
    /// Returns `Persistence` on constraint violation (chat or author absent).
    fn create(
        &self,
        message: &CreateMessage,
        author_id: &UserId,
        chat_id: &ChatId,
    ) -> impl std::future::Future<Output = Result<MessageId, RepositoryError>> + Send;

    /// Fetch a message by id. Returns `NotFound` if absent.
    fn read(
        &self,
        id: &MessageId,
    ) -> impl std::future::Future<Output = Result<ReadMessage, RepositoryError>> + Send;
}
