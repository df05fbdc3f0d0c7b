//! tui-alert-demo - Interactive demo of modal alert dialogs.
//!
//! Responsibilities:
//! - Orchestrate startup and shutdown.
//! - Initialize logging, appearance, and the terminal.
//! - Run the event loop.
//!
//! Invariants:
//! - Appearance errors are reported before the terminal enters raw mode.
//! - Logs go to a daily rolling file; the terminal stays clean.
//! - Appearance precedence: CLI args > env vars > appearance file > defaults.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tui_alert_config::constants::DEFAULT_UI_TICK_MS;
use tui_alert_config::{Appearance, AppearanceLoader};
use tui_alert_demo::{Cli, DemoApp, terminal::TerminalGuard};

fn load_appearance(cli: &Cli) -> Result<Appearance> {
    let mut loader = AppearanceLoader::new().load_dotenv()?;
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader.from_file()?.from_env()?;
    if cli.no_blur {
        loader = loader.with_use_blur_background(false);
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    Ok(loader.build()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "tui-alert-demo.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let appearance = load_appearance(&cli)?;
    tracing::info!(mode = ?cli.mode, theme = %appearance.theme, "Starting demo");

    let mut stdout = std::io::stdout();
    let _terminal_guard = TerminalGuard::enter(&mut stdout, !cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = DemoApp::new(cli.mode, appearance);
    let mut events = EventStream::new();
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                    None => break,
                }
            }
            _ = tick_interval.tick() => {
                app.on_tick(Instant::now());
            }
        }
    }

    tracing::info!(status = %app.status(), "Exiting demo");
    terminal.show_cursor()?;

    Ok(())
}
