//! Chat records.
//!
//! A chat is created once by its owner and read back unchanged. Its id and
//! creation time are assigned by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ChatId, UserId};

/// Request to create a chat. The owner is passed alongside, not inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChat {
    /// Display name of the chat.
    pub name: String,
}

/// A stored chat as returned by `ChatRepository::read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadChat {
    pub id: ChatId,
    /// The user who created the chat.
    pub owner_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
