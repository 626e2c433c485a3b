mod cli;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;
use folio::app::{keymap::KeyConfig, persistence, r#loop::run_loop, state::AppState};
use folio::domain::models::Route;
use folio::infrastructure::system_host::SystemHost;

/// The TUI owns the terminal, so logs go to a file.
fn setup_logging(debug: bool) -> Option<WorkerGuard> {
    let level = if debug || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("folio-{timestamp}.log");
    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .ok()?;
    Some(guard)
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = setup_logging(cli.debug);
    setup_panic_hook();

    // Config is read before the terminal goes raw so a bad file can't leave
    // it in a broken state.
    let theme_mode = cli
        .theme
        .map(Into::into)
        .unwrap_or_else(|| persistence::load_preferences().theme);
    let key_config = KeyConfig::load();
    let mut app_state = AppState::new(&key_config, theme_mode);

    if cli.skip_intro {
        app_state = app_state.skip_intro();
    }
    if let Some(path) = cli.route.as_deref() {
        match Route::resolve(path) {
            Some(route) => app_state.route = route,
            None => tracing::warn!(%path, "unknown start route, opening Home"),
        }
    }
    tracing::info!(?theme_mode, route = ?app_state.route, "starting folio");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, Arc::new(SystemHost::new())).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("exited with error: {err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}
