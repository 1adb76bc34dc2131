//! Shared domain types for Chatest.
//!
//! This crate contains the records exchanged across the repository boundary:
//! typed identifiers, the create/read DTOs for users, chats and messages,
//! error enums, and configuration types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod id;
pub mod message;
pub mod user;
