//! CLI command definitions and dispatch for the `chatest` binary.
//!
//! Uses clap derive macros for argument parsing. Commands follow a
//! noun-verb pattern (e.g., `chatest chat create`, `chatest message show`).

pub mod chat;
pub mod message;
pub mod user;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chatest_core::encoder::encode_json;
use chatest_types::id::{ChatId, MessageId, UserId};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Store and inspect chats and messages.
#[derive(Parser)]
#[command(name = "chatest", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output on stdout is unaffected.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data directory holding chatest.db and config.toml.
    #[arg(long, global = true, env = "CHATEST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage users.
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage chats.
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },

    /// Send and inspect messages.
    #[command(alias = "msg")]
    Message {
        #[command(subcommand)]
        action: MessageAction,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a new user.
    Create {
        /// Unique username.
        username: String,
    },

    /// Show a user by id.
    Show { id: UserId },
}

#[derive(Subcommand)]
pub enum ChatAction {
    /// Create a chat owned by an existing user.
    Create {
        /// Owner user id.
        #[arg(long)]
        owner: UserId,

        /// Chat name.
        name: String,
    },

    /// Show a chat by id.
    Show { id: ChatId },
}

#[derive(Subcommand)]
pub enum MessageAction {
    /// Post a message into a chat.
    Send {
        /// Target chat id.
        #[arg(long)]
        chat: ChatId,

        /// Author user id.
        #[arg(long)]
        author: UserId,

        /// Message text.
        text: String,
    },

    /// Print a message exactly as encoded for transmission.
    Show { id: MessageId },
}

/// Write a record to stdout using the message encoder's JSON policy.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let bytes = encode_json(value)?;
    let mut out = std::io::stdout().lock();
    out.write_all(&bytes)?;
    writeln!(out)?;
    Ok(())
}
