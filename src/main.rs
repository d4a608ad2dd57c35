//! huddle - A terminal team chat and task board.
//!
//! This is the main binary that launches the TUI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use huddle_config::{Config, LogConfig};
use huddle_protocol::dummy::{dummy_board, dummy_chat};
use huddle_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Routes log output to the configured file.
///
/// `RUST_LOG` takes precedence over the configured level. Without a log file
/// nothing is recorded, since the terminal belongs to the UI.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let Some(path) = log.file.as_ref().filter(|_| log.is_enabled()) else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log.level.as_str().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await?;
    init_logging(&config.log)?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut app = App::with_config(dummy_chat(), dummy_board(), &config);
    info!(theme = %config.theme, view = %config.view, "starting huddle");

    let mut terminal = terminal::setup_terminal()?;

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
