use std::env;
use std::io;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::logging;
use crate::mpris::{self, ControlCmd};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;


const DUMP_CONFIG_FLAG: &str = "--dump-config";

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
}

/// Run `setup`; if it fails, run `restore` before handing back the error.
fn setup_or_restore<T, E>(
    setup: impl FnOnce() -> Result<T, E>,
    restore: impl FnOnce(),
) -> Result<T, E> {
    setup().inspect_err(|_| restore())
}

/// Switch to the alternate screen with mouse capture. Raw mode must already
/// be on; the caller restores the terminal if this fails.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn run() ->Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();

    if env::args().skip(1).any(|a| a == DUMP_CONFIG_FLAG) {
        if let Some(msg) = config_warning {
            eprintln!("encore: {msg}");
        }
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    match logging::init(&settings.log) {
        Ok(path) => info!(path = %path.display(), "logging to file"),
        Err(e) => eprintln!("encore: logging disabled: {e}"),
    }
    if let Some(msg) = config_warning {
        warn!("{msg}");
    }

    let catalog = Catalog::from_settings(&settings.catalog).unwrap_or_else(|e| {
        warn!(error = %e, "invalid catalog, using the built-in sample");
        Catalog::sample()
    });
    info!(tracks = catalog.len(), "catalog ready");

    let mut app = startup::build_app(catalog, &settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = settings
        .mpris
        .enabled
        .then(|| mpris::spawn_mpris(control_tx.clone()));

    // Restore the terminal on panic so the shell is usable afterwards.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, || {
        let _ = restore_terminal();
    })?;

    let mut state = event_loop::EventLoopState::new(&settings.controls);
    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        mpris.as_ref(),
        &control_rx,
        &mut state,
    );

    // Stops the ticker thread before the terminal is handed back.
    drop(state);
    restore_terminal()?;
    terminal.show_cursor()?;
    info!("shutdown");

    run_result
}
