//! SQLite user repository implementation.

use chatest_core::repository::user::UserRepository;
use chatest_types::error::RepositoryError;
use chatest_types::id::UserId;
use chatest_types::user::{CreateUser, ReadUser};
use chrono::Utc;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, persistence};

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct UserRow {
    id: String,
    username: String,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<ReadUser, RepositoryError> {
        Ok(ReadUser {
            id: UserId(parse_uuid("user id", &self.id)?),
            username: self.username,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &CreateUser) -> Result<UserId, RepositoryError> {
        let id = UserId::new();

        sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(&user.username)
            .bind(format_datetime(&Utc::now()))
            .execute(&self.pool.writer)
            .await
            .map_err(persistence)?;

        tracing::debug!(%id, "inserted user");
        Ok(id)
    }

    async fn read(&self, id: &UserId) -> Result<ReadUser, RepositoryError> {
        let row = sqlx::query("SELECT id, username, created_at FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(persistence)?
            .ok_or(RepositoryError::NotFound)?;

        UserRow::from_row(&row).map_err(persistence)?.into_user()
    }
}
