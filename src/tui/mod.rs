// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, backend completions)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod views;

use crate::client::HttpIncidentClient;
use crate::config::Config;
use crate::controller::{Completion, Controller};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = HttpIncidentClient::new(config.api_url.clone())?;
    tracing::info!(api_url = %client.base_url(), "Starting TUI");
    let (controller, mut completions) = Controller::new(Arc::new(client));
    let mut app = App::new(controller, config, log_buffer);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app, &mut completions).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("TUI closed");
    result
}

/// Main event loop
///
/// Waits on three sources and redraws after each:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Finished backend calls
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completions: &mut mpsc::Receiver<Completion>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        input::handle_key(app, key);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(completion) = completions.recv() => {
                app.apply(completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
