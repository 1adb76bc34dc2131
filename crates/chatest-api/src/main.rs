//! Chatest CLI entry point.
//!
//! Binary name: `chatest`
//!
//! Parses CLI arguments, loads configuration, initializes tracing and the
//! database, then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;

use chatest_infra::config::{load_config_or_default, resolve_data_dir};
use chatest_observe::tracing_setup::{init_tracing, shutdown_tracing};
use cli::{ChatAction, Cli, Commands, MessageAction, UserAction};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(resolve_data_dir);
    let (config, config_err) = load_config_or_default(&data_dir).await;

    // Verbosity flags override the configured level
    let mut log = config.log.clone();
    match cli.verbose {
        0 if cli.quiet => log.level = "error".to_string(),
        0 => {}
        1 => log.level = "info,chatest_core=debug,chatest_infra=debug".to_string(),
        _ => log.level = "trace".to_string(),
    }
    init_tracing(&log).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    if let Some(err) = config_err {
        tracing::warn!("{err}, using defaults");
    }
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let result = run(cli, &data_dir, &config).await;
    shutdown_tracing();
    result
}

async fn run(
    cli: Cli,
    data_dir: &std::path::Path,
    config: &chatest_types::config::AppConfig,
) -> anyhow::Result<()> {
    let state = AppState::init(data_dir, config).await?;

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Create { username } => {
                cli::user::create_user(&state, username, cli.json).await?;
            }
            UserAction::Show { id } => {
                cli::user::show_user(&state, &id, cli.json).await?;
            }
        },

        Commands::Chat { action } => match action {
            ChatAction::Create { owner, name } => {
                cli::chat::create_chat(&state, &owner, name, cli.json).await?;
            }
            ChatAction::Show { id } => {
                cli::chat::show_chat(&state, &id, cli.json).await?;
            }
        },

        Commands::Message { action } => match action {
            MessageAction::Send { chat, author, text } => {
                cli::message::send_message(&state, &chat, &author, text, cli.json).await?;
            }
            MessageAction::Show { id } => {
                cli::message::show_message(&state, &id).await?;
            }
        },
    }

    Ok(())
}
