//! Infrastructure layer for Chatest.
//!
//! Contains the SQLite implementations of the repository traits defined in
//! `chatest-core`, plus data-directory and `config.toml` resolution.

pub mod config;
pub mod sqlite;
