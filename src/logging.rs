//! File logging via `tracing`.
//!
//! The terminal belongs to the UI, so events go to a plain-text log file.
//! `ENCORE_LOG` takes an `EnvFilter` directive and wins over `log.level`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, xdg_dir};

pub const LOG_ENV: &str = "ENCORE_LOG";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("no log file location (set log.file or HOME)")]
    NoPath,
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// `log.file` if set, else `$XDG_STATE_HOME/encore/encore.log`, else
/// `~/.local/state/encore/encore.log`.
pub fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(|| {
        xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("encore").join("encore.log"))
    })
}

/// Filter from `ENCORE_LOG`, falling back to `level`, then to `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the file being written to.
pub fn init(settings: &LogSettings) -> Result<PathBuf, LogError> {
    let path = log_path(settings).ok_or(LogError::NoPath)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(env_filter(&settings.level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(path)
}
