//! Terminal lifecycle, event loop, and cleanup for the database assistant chat.

mod actions;
mod app;
mod backend;
mod config;
mod error;
mod events;
mod state;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use backend::ChatClient;
use config::Config;
use events::{key_to_action, TICK_RATE};

const DEFAULT_LOG_FILTER: &str = "dbchat_tui=info";

/// `RUST_LOG` when it parses, otherwise the crate at info.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    // The terminal belongs to the UI, so diagnostics go to the log file (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "starting chat client");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building async runtime")?;
    let client = ChatClient::new(&config).context("building HTTP client")?;
    let mut app = App::new(client, runtime.handle().clone());
    app.state.render_markdown = config.markdown;

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    // Requests still in flight are abandoned.
    if app.state.pending > 0 {
        info!(pending = app.state.pending, "exiting with replies outstanding");
    }
    runtime.shutdown_background();
    info!("chat client stopped");

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_results();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        terminal.draw(|frame| ui::render(frame, app, tick))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(&key) {
                    app.dispatch(action);
                }
            }
        }
    }
}
