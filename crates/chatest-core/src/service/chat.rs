//! Chat management service.

use chatest_types::chat::{CreateChat, ReadChat};
use chatest_types::error::ServiceError;
use chatest_types::id::{ChatId, UserId};

use super::require_name;
use crate::repository::chat::ChatRepository;

/// Service orchestrating chat creation and lookup.
///
/// Generic over the repository trait -- chatest-core never depends on
/// chatest-infra.
pub struct ChatService<C: ChatRepository> {
    repo: C,
}

impl<C: ChatRepository> ChatService<C> {
    pub fn new(repo: C) -> Self {
        Self { repo }
    }

    /// Create a chat owned by `owner_id` and return the stored record.
    ///
    /// The name is trimmed and must be non-empty. A missing owner surfaces
    /// as the repository's `Persistence` error.
    #[tracing::instrument(skip(self, request), fields(owner_id = %owner_id))]
    pub async fn create_chat(
        &self,
        request: CreateChat,
        owner_id: &UserId,
    ) -> Result<ReadChat, ServiceError> {
        let name = require_name("chat name", &request.name)?;
        let id = self.repo.create(&CreateChat { name }, owner_id).await?;
        tracing::debug!(%id, "chat created");
        Ok(self.repo.read(&id).await?)
    }

    pub async fn get_chat(&self, id: &ChatId) -> Result<ReadChat, ServiceError> {
        Ok(self.repo.read(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::{InMemoryChatRepository, InMemoryStore, InMemoryUserRepository};
    use crate::repository::user::UserRepository;
    use chatest_types::error::RepositoryError;
    use chatest_types::user::CreateUser;

    async fn setup() -> (ChatService<InMemoryChatRepository>, UserId) {
        let store = InMemoryStore::new();
        let owner = InMemoryUserRepository::new(store.clone())
            .create(&CreateUser {
                username: "owner".into(),
            })
            .await
            .unwrap();
        (ChatService::new(InMemoryChatRepository::new(store)), owner)
    }

    #[tokio::test]
    async fn test_create_chat_returns_stored_record() {
        let (svc, owner) = setup().await;
        let chat = svc
            .create_chat(CreateChat { name: " lobby ".into() }, &owner)
            .await
            .unwrap();
        assert_eq!(chat.name, "lobby");
        assert_eq!(chat.owner_id, owner);
        assert_eq!(svc.get_chat(&chat.id).await.unwrap(), chat);
    }

    #[tokio::test]
    async fn test_create_chat_unknown_owner_propagates_persistence_error() {
        let (svc, _) = setup().await;
        let err = svc
            .create_chat(CreateChat { name: "x".into() }, &UserId::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::Persistence(_))
        ));
    }

    #[tokio::test]
    async fn test_create_chat_blank_name_rejected() {
        let (svc, owner) = setup().await;
        let err = svc
            .create_chat(CreateChat { name: "   ".into() }, &owner)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
