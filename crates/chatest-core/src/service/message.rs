//! Message service: posting, lookup, and the read-then-encode flow.

use chatest_types::error::ServiceError;
use chatest_types::id::{ChatId, MessageId, UserId};
use chatest_types::message::{CreateMessage, ReadMessage};

use crate::encoder;
use crate::repository::message::MessageRepository;

/// Service for posting messages and producing their encoded form.
pub struct MessageService<M: MessageRepository> {
    repo: M,
}

impl<M: MessageRepository> MessageService<M> {
    pub fn new(repo: M) -> Self {
        Self { repo }
    }

    /// Post a message and return the stored record.
    ///
    /// The text is stored verbatim but must contain something other than
    /// whitespace.
    #[tracing::instrument(skip(self, request), fields(author_id = %author_id, chat_id = %chat_id))]
    pub async fn send_message(
        &self,
        request: CreateMessage,
        author_id: &UserId,
        chat_id: &ChatId,
    ) -> Result<ReadMessage, ServiceError> {
        if request.text.trim().is_empty() {
            return Err(ServiceError::Validation(
                "message text cannot be empty".to_string(),
            ));
        }
        let id = self.repo.create(&request, author_id, chat_id).await?;
        tracing::debug!(%id, bytes = request.text.len(), "message stored");
        Ok(self.repo.read(&id).await?)
    }

    pub async fn get_message(&self, id: &MessageId) -> Result<ReadMessage, ServiceError> {
        Ok(self.repo.read(id).await?)
    }

    /// Read a message and encode it as indented, relaxed-escaping JSON bytes.
    #[tracing::instrument(skip(self))]
    pub async fn read_encoded(&self, id: &MessageId) -> Result<Vec<u8>, ServiceError> {
        let message = self.repo.read(id).await?;
        Ok(encoder::encode_message(&message)?)
    }
}
