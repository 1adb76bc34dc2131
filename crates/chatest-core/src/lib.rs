//! Business logic and repository trait definitions for Chatest.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, the JSON message encoder, and the services composing
//! them. It depends only on `chatest-types` -- never on `chatest-infra` or
//! any database/IO crate.

pub mod encoder;
pub mod repository;
pub mod service;
