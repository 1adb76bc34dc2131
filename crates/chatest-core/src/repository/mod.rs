//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (chatest-infra) implements. The core crate never depends on any
//! specific storage technology.
//!
//! Each trait exposes the same capability set: `create` persists a new
//! record and returns its store-assigned id, `read` fetches one by id and
//! fails with `RepositoryError::NotFound` when it is absent.

pub mod chat;
pub mod memory;
pub mod message;
pub mod user;
