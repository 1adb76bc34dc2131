//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `chatest-core`. The `messages` table
//! references both `chats` and `users`, so posting into an unknown chat or
//! as an unknown author fails the foreign key check.

use chatest_core::repository::message::MessageRepository;
use chatest_types::error::RepositoryError;
use chatest_types::id::{ChatId, MessageId, UserId};
use chatest_types::message::{CreateMessage, ReadMessage};
use chrono::Utc;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, persistence};

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row types
// ---------------------------------------------------------------------------

struct MessageRow {
    id: String,
    chat_id: String,
    author_id: String,
    text: String,
    sent_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            author_id: row.try_get("author_id")?,
            text: row.try_get("text")?,
            sent_at: row.try_get("sent_at")?,
        })
    }

    fn into_message(self) -> Result<ReadMessage, RepositoryError> {
        Ok(ReadMessage {
            id: MessageId(parse_uuid("message id", &self.id)?),
            chat_id: ChatId(parse_uuid("chat_id", &self.chat_id)?),
            author_id: UserId(parse_uuid("author_id", &self.author_id)?),
            text: self.text,
            sent_at: parse_datetime(&self.sent_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// MessageRepository impl
// ---------------------------------------------------------------------------

impl MessageRepository for SqliteMessageRepository {
    async fn create(
        &self,
        message: &CreateMessage,
        author_id: &UserId,
        chat_id: &ChatId,
    ) -> Result<MessageId, RepositoryError> {
        let id = MessageId::new();

        sqlx::query(
            r#"INSERT INTO messages (id, chat_id, author_id, text, sent_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(id.to_string())
        .bind(chat_id.to_string())
        .bind(author_id.to_string())
        .bind(&message.text)
        .bind(format_datetime(&Utc::now()))
        .execute(&self.pool.writer)
        .await
        .map_err(persistence)?;

        tracing::debug!(%id, %chat_id, %author_id, "inserted message");
        Ok(id)
    }

    async fn read(&self, id: &MessageId) -> Result<ReadMessage, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, chat_id, author_id, text, sent_at FROM messages WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(persistence)?
        .ok_or(RepositoryError::NotFound)?;

        MessageRow::from_row(&row).map_err(persistence)?.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::test_support::{insert_user, test_pool};
    use chatest_core::encoder::{decode_message, encode_message};

    async fn insert_chat(pool: &DatabasePool, owner: &UserId) -> ChatId {
        let id = ChatId::new();
        sqlx::query("INSERT INTO chats (id, owner_id, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(owner.to_string())
            .bind("room")
            .bind(Utc::now().to_rfc3339())
            .execute(&pool.writer)
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn test_create_and_read_message() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool.clone());
        let author = UserId(insert_user(&pool, "author").await);
        let chat = insert_chat(&pool, &author).await;

        let id = repo
            .create(
                &CreateMessage {
                    text: "héllo \"world\" 👋".into(),
                },
                &author,
                &chat,
            )
            .await
            .unwrap();

        let msg = repo.read(&id).await.unwrap();
        assert_eq!(msg.id, id);
        assert_eq!(msg.chat_id, chat);
        assert_eq!(msg.author_id, author);
        assert_eq!(msg.text, "héllo \"world\" 👋");
    }

    #[tokio::test]
    async fn test_create_message_unknown_chat_fails() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool.clone());
        let author = UserId(insert_user(&pool, "author").await);

        let err = repo
            .create(&CreateMessage { text: "hi".into() }, &author, &ChatId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_create_message_unknown_author_fails() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool.clone());
        let owner = UserId(insert_user(&pool, "owner").await);
        let chat = insert_chat(&pool, &owner).await;

        let err = repo
            .create(&CreateMessage { text: "hi".into() }, &UserId::new(), &chat)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_read_missing_message() {
        let repo = SqliteMessageRepository::new(test_pool().await);
        assert!(matches!(
            repo.read(&MessageId::new()).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_stored_message_encodes_and_decodes_unchanged() {
        let pool = test_pool().await;
        let repo = SqliteMessageRepository::new(pool.clone());
        let author = UserId(insert_user(&pool, "author").await);
        let chat = insert_chat(&pool, &author).await;
        let id = repo
            .create(&CreateMessage { text: "naïve <tag>".into() }, &author, &chat)
            .await
            .unwrap();

        let stored = repo.read(&id).await.unwrap();
        let bytes = encode_message(&stored).unwrap();
        assert_eq!(decode_message(&bytes).unwrap(), stored);
    }
}
