//! Chat CLI commands: create, show.

use anyhow::{Context, Result};
use console::style;

use chatest_types::chat::{CreateChat, ReadChat};
use chatest_types::id::{ChatId, UserId};

use super::print_json;
use crate::state::AppState;

/// Create a chat owned by `owner` and print the stored record.
pub async fn create_chat(state: &AppState, owner: &UserId, name: String, json: bool) -> Result<()> {
    let chat = state
        .chat_service
        .create_chat(CreateChat { name }, owner)
        .await
        .context("failed to create chat")?;

    if json {
        return print_json(&chat);
    }

    println!();
    println!("  {} Chat created", style("✓").green().bold());
    print_chat(&chat);
    Ok(())
}

/// Print a chat by id.
pub async fn show_chat(state: &AppState, id: &ChatId, json: bool) -> Result<()> {
    let chat = state
        .chat_service
        .get_chat(id)
        .await
        .with_context(|| format!("chat {id}"))?;

    if json {
        return print_json(&chat);
    }

    print_chat(&chat);
    Ok(())
}

fn print_chat(chat: &ReadChat) {
    println!();
    println!("  {}     {}", style("Name:").bold(), style(&chat.name).cyan());
    println!("  {}       {}", style("ID:").bold(), chat.id);
    println!("  {}    {}", style("Owner:").bold(), chat.owner_id);
    println!("  {}  {}", style("Created:").bold(), chat.created_at.to_rfc3339());
    println!();
}
