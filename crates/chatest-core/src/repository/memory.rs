//! In-memory repository backend.
//!
//! `InMemoryStore` keeps users, chats, and messages in `DashMap`s and is
//! shared between the three repository handles by cloning (backed by `Arc`).
//! It enforces the same referential rules as the SQLite schema: owners,
//! authors, and chats must exist, and usernames are unique. Violations
//! surface as `RepositoryError::Persistence`.
//!
//! Records are cloned on read so no `DashMap` guard outlives a call.

use std::sync::Arc;

use chatest_types::chat::{CreateChat, ReadChat};
use chatest_types::error::RepositoryError;
use chatest_types::id::{ChatId, MessageId, UserId};
use chatest_types::message::{CreateMessage, ReadMessage};
use chatest_types::user::{CreateUser, ReadUser};
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::chat::ChatRepository;
use super::message::MessageRepository;
use super::user::UserRepository;

#[derive(Debug, Default)]
struct Tables {
    users: DashMap<UserId, ReadUser>,
    usernames: DashMap<String, UserId>,
    chats: DashMap<ChatId, ReadChat>,
    messages: DashMap<MessageId, ReadMessage>,
}

/// Shared in-memory storage for all three repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn require_user(&self, id: &UserId) -> Result<(), RepositoryError> {
        if self.tables.users.contains_key(id) {
            Ok(())
        } else {
            Err(RepositoryError::Persistence(format!("user {id} does not exist")))
        }
    }
}

/// `UserRepository` view over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &CreateUser) -> Result<UserId, RepositoryError> {
        let tables = &self.store.tables;
        match tables.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Persistence(format!(
                "username '{}' already exists",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let id = UserId::new();
                tables.users.insert(
                    id,
                    ReadUser {
                        id,
                        username: user.username.clone(),
                        created_at: Utc::now(),
                    },
                );
                slot.insert(id);
                Ok(id)
            }
        }
    }

    async fn read(&self, id: &UserId) -> Result<ReadUser, RepositoryError> {
        self.store
            .tables
            .users
            .get(id)
            .map(|r| r.value().clone())
            .ok_or(RepositoryError::NotFound)
    }
}

/// `ChatRepository` view over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryChatRepository {
    store: InMemoryStore,
}

impl InMemoryChatRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl ChatRepository for InMemoryChatRepository {
    async fn create(&self, chat: &CreateChat, owner_id: &UserId) -> Result<ChatId, RepositoryError> {
        self.store.require_user(owner_id)?;

        let id = ChatId::new();
        self.store.tables.chats.insert(
            id,
            ReadChat {
                id,
                owner_id: *owner_id,
                name: chat.name.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn read(&self, id: &ChatId) -> Result<ReadChat, RepositoryError> {
        self.store
            .tables
            .chats
            .get(id)
            .map(|r| r.value().clone())
            .ok_or(RepositoryError::NotFound)
    }
}

/// `MessageRepository` view over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryMessageRepository {
    store: InMemoryStore,
}

impl InMemoryMessageRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl MessageRepository for InMemoryMessageRepository {
    async fn create(
        &self,
        message: &CreateMessage,
        author_id: &UserId,
        chat_id: &ChatId,
    ) -> Result<MessageId, RepositoryError> {
        self.store.require_user(author_id)?;
        if !self.store.tables.chats.contains_key(chat_id) {
            return Err(RepositoryError::Persistence(format!(
                "chat {chat_id} does not exist"
            )));
        }

        let id = MessageId::new();
        self.store.tables.messages.insert(
            id,
            ReadMessage {
                id,
                chat_id: *chat_id,
                author_id: *author_id,
                text: message.text.clone(),
                sent_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn read(&self, id: &MessageId) -> Result<ReadMessage, RepositoryError> {
        self.store
            .tables
            .messages
            .get(id)
            .map(|r| r.value().clone())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Repos {
        users: InMemoryUserRepository,
        chats: InMemoryChatRepository,
        messages: InMemoryMessageRepository,
    }

    fn repos() -> Repos {
        let store = InMemoryStore::new();
        Repos {
            users: InMemoryUserRepository::new(store.clone()),
            chats: InMemoryChatRepository::new(store.clone()),
            messages: InMemoryMessageRepository::new(store),
        }
    }

    async fn seed_user(repos: &Repos, name: &str) -> UserId {
        repos
            .users
            .create(&CreateUser {
                username: name.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_read_chat() {
        let repos = repos();
        let owner = seed_user(&repos, "alice").await;

        let id = repos
            .chats
            .create(&CreateChat { name: "general".into() }, &owner)
            .await
            .unwrap();

        let chat = repos.chats.read(&id).await.unwrap();
        assert_eq!(chat.id, id);
        assert_eq!(chat.owner_id, owner);
        assert_eq!(chat.name, "general");
    }

    #[tokio::test]
    async fn test_create_chat_unknown_owner_fails() {
        let repos = repos();
        let err = repos
            .chats
            .create(&CreateChat { name: "orphan".into() }, &UserId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_read_missing_returns_not_found() {
        let repos = repos();
        assert!(matches!(
            repos.users.read(&UserId::new()).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            repos.chats.read(&ChatId::new()).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(matches!(
            repos.messages.read(&MessageId::new()).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_and_read_message() {
        let repos = repos();
        let author = seed_user(&repos, "bob").await;
        let chat = repos
            .chats
            .create(&CreateChat { name: "dev".into() }, &author)
            .await
            .unwrap();

        let id = repos
            .messages
            .create(&CreateMessage { text: "héllo".into() }, &author, &chat)
            .await
            .unwrap();

        let msg = repos.messages.read(&id).await.unwrap();
        assert_eq!(msg.id, id);
        assert_eq!(msg.chat_id, chat);
        assert_eq!(msg.author_id, author);
        assert_eq!(msg.text, "héllo");
    }

    #[tokio::test]
    async fn test_create_message_unknown_chat_or_author_fails() {
        let repos = repos();
        let author = seed_user(&repos, "carol").await;
        let chat = repos
            .chats
            .create(&CreateChat { name: "ops".into() }, &author)
            .await
            .unwrap();
        let body = CreateMessage { text: "hi".into() };

        let err = repos
            .messages
            .create(&body, &author, &ChatId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(_)));

        let err = repos
            .messages
            .create(&body, &UserId::new(), &chat)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(_)));
    }

    #[tokio::test]
    async fn test_duplicate_username_fails() {
        let repos = repos();
        seed_user(&repos, "dave").await;
        let err = repos
            .users
            .create(&CreateUser {
                username: "dave".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Persistence(ref m) if m.contains("dave")));
    }
}
