//! Message CLI commands: send, show.
//!
//! `show` writes the encoder's bytes verbatim, so its output is the exact
//! payload a transport would carry.

use std::io::Write;

use anyhow::{Context, Result};
use console::style;

use chatest_types::id::{ChatId, MessageId, UserId};
use chatest_types::message::CreateMessage;

use super::print_json;
use crate::state::AppState;

/// Post a message and print the stored record.
pub async fn send_message(
    state: &AppState,
    chat: &ChatId,
    author: &UserId,
    text: String,
    json: bool,
) -> Result<()> {
    let message = state
        .message_service
        .send_message(CreateMessage { text }, author, chat)
        .await
        .context("failed to send message")?;

    if json {
        return print_json(&message);
    }

    println!();
    println!("  {} Message sent", style("✓").green().bold());
    println!();
    println!("  {}    {}", style("ID:").bold(), message.id);
    println!("  {}  {}", style("Sent:").bold(), message.sent_at.to_rfc3339());
    println!();
    Ok(())
}

/// Print the encoded form of a message.
pub async fn show_message(state: &AppState, id: &MessageId) -> Result<()> {
    let bytes = state
        .message_service
        .read_encoded(id)
        .await
        .with_context(|| format!("message {id}"))?;

    let mut out = std::io::stdout().lock();
    out.write_all(&bytes)?;
    writeln!(out)?;
    Ok(())
}
