// NOC Center - incident management console
//
// A terminal dashboard for operations teams: browse and search incidents,
// open a detail view with AI root-cause suggestions, and file new incidents
// with a department suggested by the backend.
//
// Architecture:
// - Client (reqwest): the incident backend behind a repository trait
// - Incidents: wire records normalized into display records
// - Controller: view state, navigation, and stale-response guarding
// - TUI (ratatui): screens driven by a tokio::select! loop
// - CLI (clap): config management and one-shot backend commands

mod catalog;
mod cli;
mod client;
mod config;
mod controller;
mod incidents;
mod logging;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, Sink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches logging or the backend
    if let Some(Commands::Config { show, path, reset }) = cli.command {
        return cli::handle_config(show, path, reset);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("╭─ Configuration error ─────────────────────────────");
            eprintln!("│ {:#}", e);
            eprintln!("│");
            eprintln!("│ Fix the file or run `noc config --reset`");
            eprintln!("╰───────────────────────────────────────────────────");
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(command) if command.is_remote() => {
            let _guard = logging::init(&config.logging, Sink::Stderr)?;
            cli::handle_remote(command, &config).await
        }
        _ => {
            Config::ensure_config_exists();
            let log_buffer = LogBuffer::new();
            let _guard = logging::init(&config.logging, Sink::Tui(log_buffer.clone()))?;
            tracing::info!(api_url = %config.api_url, "Configuration loaded");
            tui::run_tui(config, log_buffer).await
        }
    }
}
