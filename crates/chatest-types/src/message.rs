//! Message records.
//!
//! A message belongs to exactly one chat and is authored by exactly one
//! user. [`ReadMessage`] is the flat projection handed to the message
//! encoder; its field order is the order keys appear in the encoded JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ChatId, MessageId, UserId};

/// Request to post a message. Author and chat are passed alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    /// Message body, stored verbatim.
    pub text: String,
}

/// A stored message as returned by `MessageRepository::read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadMessage {
    pub id: MessageId,
    pub chat_id: ChatId,
    pub author_id: UserId,
    pub text: String,
    /// When the store accepted the message.
    pub sent_at: DateTime<Utc>,
}
