//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions only log when a file
//! is configured. One-shot commands log to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "pdfchat=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Destination for an interactive session.
    pub fn for_tui(log_file: Option<PathBuf>) -> Self {
        log_file.map(LogTarget::File).unwrap_or(LogTarget::Discard)
    }

    /// Destination for a one-shot command: the log file if given, else stderr.
    pub fn for_command(log_file: Option<PathBuf>) -> Self {
        log_file.map(LogTarget::File).unwrap_or(LogTarget::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, Box<dyn Error>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| format!("Failed to open log file {}: {err}", path.display()).into())
}

/// Install the global subscriber. Calling it twice is an error.
pub fn init_tracing(target: &LogTarget) -> Result<(), Box<dyn Error>> {
    match target {
        LogTarget::Discard => Ok(()),
        LogTarget::Stderr => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact();
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()?;
            Ok(())
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()?;
            Ok(())
        }
    }
}
