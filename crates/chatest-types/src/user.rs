//! User records.
//!
//! Users own chats and author messages. The chat and message stores refer
//! to them by [`UserId`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Unique, case-sensitive login name.
    pub username: String,
}

/// A stored user as returned by `UserRepository::read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadUser {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
