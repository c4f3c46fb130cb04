//! Terminal UI for Strictly Hangman

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Input, map_key};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::config::HangmanConfig;
use crate::word_service::provider_for;

/// Run the terminal UI until the player quits.
pub async fn run_tui(config: HangmanConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(difficulty = %config.difficulty(), offline = config.offline(), "Starting Strictly Hangman TUI");

    let provider = provider_for(&config)?;
    let mut app = App::new(provider, *config.difficulty())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Draw, read a key, apply it; repeat.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.announce_fetch();
    terminal.draw(|f| ui::draw(f, app))?;
    app.new_round().await;

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        let Some(input) = map_key(key) else {
            continue;
        };

        if input == Input::NewRound {
            // Show the pending fetch before suspending on the provider.
            app.announce_fetch();
            terminal.draw(|f| ui::draw(f, app))?;
            app.new_round().await;
            continue;
        }

        app.handle_input(input).await;
    }

    info!("User quit");
    Ok(())
}
