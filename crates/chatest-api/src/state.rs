//! Application state wiring all services together.
//!
//! Services are generic over the repository traits; AppState pins them to
//! the SQLite implementations sharing one `DatabasePool`.

use std::path::Path;
use std::sync::Arc;

use chatest_core::service::chat::ChatService;
use chatest_core::service::message::MessageService;
use chatest_core::service::user::UserService;
use chatest_infra::config::resolve_database_url;
use chatest_infra::sqlite::chat::SqliteChatRepository;
use chatest_infra::sqlite::message::SqliteMessageRepository;
use chatest_infra::sqlite::pool::DatabasePool;
use chatest_infra::sqlite::user::SqliteUserRepository;
use chatest_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteUserService = UserService<SqliteUserRepository>;
pub type ConcreteChatService = ChatService<SqliteChatRepository>;
pub type ConcreteMessageService = MessageService<SqliteMessageRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<ConcreteUserService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub message_service: Arc<ConcreteMessageService>,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services.
    pub async fn init(data_dir: &Path, config: &AppConfig) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(data_dir).await?;

        let db_url = resolve_database_url(config, data_dir);
        let db_pool = DatabasePool::new(&db_url).await?;

        Ok(Self {
            user_service: Arc::new(UserService::new(SqliteUserRepository::new(db_pool.clone()))),
            chat_service: Arc::new(ChatService::new(SqliteChatRepository::new(db_pool.clone()))),
            message_service: Arc::new(MessageService::new(SqliteMessageRepository::new(db_pool))),
        })
    }
}
