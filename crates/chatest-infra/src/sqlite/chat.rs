//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `chatest-core` using sqlx with split read/write pools:
//! raw queries, a private Row struct, reader pool for SELECT, writer pool for INSERT.

use chatest_core::repository::chat::ChatRepository;
use chatest_types::chat::{CreateChat, ReadChat};
use chatest_types::error::RepositoryError;
use chatest_types::id::{ChatId, UserId};
use chrono::Utc;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, persistence};

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ReadChat.
struct ChatRow {
    id: String,
    owner_id: String,
    name: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<ReadChat, RepositoryError> {
        Ok(ReadChat {
            id: ChatId(parse_uuid("chat id", &self.id)?),
            owner_id: UserId(parse_uuid("owner_id", &self.owner_id)?),
            name: self.name,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn create(&self, chat: &CreateChat, owner_id: &UserId) -> Result<ChatId, RepositoryError> {
        let id = ChatId::new();

        sqlx::query("INSERT INTO chats (id, owner_id, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .bind(&chat.name)
            .bind(format_datetime(&Utc::now()))
            .execute(&self.pool.writer)
            .await
            .map_err(persistence)?;

        tracing::debug!(%id, %owner_id, "inserted chat");
        Ok(id)
    }

    async fn read(&self, id: &ChatId) -> Result<ReadChat, RepositoryError> {
        let row = sqlx::query("SELECT id, owner_id, name, created_at FROM chats WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(persistence)?
            .ok_or(RepositoryError::NotFound)?;

        ChatRow::from_row(&row).map_err(persistence)?.into_chat()
    }
}
