//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools. Ids are stored as UUID strings and
//! timestamps as RFC 3339 text.

pub mod chat;
pub mod message;
pub mod pool;
pub mod user;

use chatest_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

fn parse_uuid(column: &str, s: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(s).map_err(|e| RepositoryError::Persistence(format!("invalid {column}: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Persistence(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn persistence(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Persistence(e.to_string())
}
