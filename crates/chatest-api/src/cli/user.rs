//! User CLI commands: create, show.

use anyhow::{Context, Result};
use console::style;

use chatest_types::id::UserId;
use chatest_types::user::{CreateUser, ReadUser};

use super::print_json;
use crate::state::AppState;

/// Register a user and print the stored record.
pub async fn create_user(state: &AppState, username: String, json: bool) -> Result<()> {
    let user = state
        .user_service
        .register(CreateUser { username })
        .await
        .context("failed to register user")?;

    if json {
        return print_json(&user);
    }

    println!();
    println!("  {} User created", style("✓").green().bold());
    print_user(&user);
    Ok(())
}

/// Print a user by id.
pub async fn show_user(state: &AppState, id: &UserId, json: bool) -> Result<()> {
    let user = state
        .user_service
        .get_user(id)
        .await
        .with_context(|| format!("user {id}"))?;

    if json {
        return print_json(&user);
    }

    print_user(&user);
    Ok(())
}

fn print_user(user: &ReadUser) {
    println!();
    println!("  {}  {}", style("Username:").bold(), style(&user.username).cyan());
    println!("  {}        {}", style("ID:").bold(), user.id);
    println!("  {}   {}", style("Created:").bold(), user.created_at.to_rfc3339());
    println!();
}
