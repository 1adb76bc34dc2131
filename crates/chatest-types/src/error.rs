use thiserror::Error;

/// Errors from repository operations (used by trait definitions in chatest-core).
///
/// Both variants are surfaced to the caller unchanged; no layer retries.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A read named an identifier that matches no stored entity.
    #[error("entity not found")]
    NotFound,

    /// The store rejected or failed a write (constraint violation,
    /// connectivity failure, unreadable row).
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Errors from the JSON message encoder.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by the chat, message, and user services.
///
/// Repository and encoder failures pass through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ServiceError {
    /// True when the underlying cause is a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Repository(RepositoryError::NotFound))
    }
}
