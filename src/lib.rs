pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod logging;
pub mod resilience;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::state::AppState;
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use resilience::outcome::FetchOutcome;
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        logging::setup_logger(path, cli.log_level.into())?;
    }

    if cli.one_shot {
        return run_one_shot(&cli).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: &Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli);

    tx.send(AppEvent::Bootstrap).await?;
    terminal.draw(|frame| ui::render(frame, &app, cli))?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app, cli))?;
    }

    log::info!("shutting down");
    Ok(())
}

/// Fetches once and prints a text snapshot, without touching the terminal.
async fn run_one_shot(cli: &Cli) -> Result<()> {
    let prefs_path = app::prefs::preferences_path(cli)
        .context("no preferences path; pass --prefs or set HOME")?;
    let prefs = app::prefs::load_preferences(&prefs_path)?
        .with_context(|| format!("no preferences file at {}", prefs_path.display()))?;

    let clients = app::state::Clients::from_cli(cli);
    match FetchOutcome::from(clients.forecast.fetch(&prefs.forecast_query()).await) {
        FetchOutcome::Success(bundle) => {
            print!("{}", ui::snapshot::snapshot(&bundle, &prefs, cli.icon_mode()));
            Ok(())
        }
        failure => anyhow::bail!(
            "forecast unavailable: {}",
            failure.error_message().unwrap_or_default()
        ),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        log::error!("panic: {panic}");
        existing(panic);
    }));
}
