//! Connection setup for the chatest SQLite store.
//!
//! Every connection runs in WAL mode with foreign keys on, so the
//! `chats.owner_id` and `messages.{chat_id,author_id}` references in the
//! schema are enforced. Writes go through a single connection; reads share
//! a small read-only pool.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// How long a connection waits on a locked database before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Size of the read-only pool.
pub const READER_CONNECTIONS: u32 = 8;

/// Connection options shared by both pools: WAL journal, foreign keys,
/// [`BUSY_TIMEOUT`], and the database file created on first use.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT)
        .create_if_missing(true))
}

/// Reader and writer pools over one SQLite database.
#[derive(Clone)]
pub struct DatabasePool {
    /// Read-only connections for `read` lookups.
    pub reader: SqlitePool,
    /// The single connection all `create` calls go through.
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the database, apply `migrations/`, then open the reader pool.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = connect_options(database_url)?;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;
        // Readers are read-only and cannot create the schema themselves
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(READER_CONNECTIONS)
            .connect_with(options.read_only(true))
            .await?;

        tracing::debug!(url = database_url, "database pool ready");
        Ok(Self { reader, writer })
    }
}

/// Database URL for `{data_dir}/chatest.db`, created on first connect.
pub fn database_url_for(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("chatest.db").display())
}
