//! CLI command implementations for Tactician.

pub(crate) mod keys;
pub(crate) mod play;
pub(crate) mod script;

mod ui;

use clap::{Args, ValueEnum};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tactician::settings::{DEFAULT_HISTORY_LEN, DEFAULT_RETURN_DELAY, Settings};

/// Output format for the `script` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// One JSON object per line.
    Json,
}

/// Options for the interactive assistant.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayArgs {
    /// Delay before an ended match returns to setup, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub(crate) return_delay_ms: u64,

    /// Number of recent actions shown
    #[arg(long, default_value_t = 3)]
    pub(crate) history: usize,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,

    /// Skip callsign entry and start at setup
    #[arg(short, long)]
    pub(crate) callsign: Option<String>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            return_delay_ms: u64::try_from(DEFAULT_RETURN_DELAY.as_millis()).unwrap_or(u64::MAX),
            history: DEFAULT_HISTORY_LEN,
            log_file: None,
            callsign: None,
        }
    }
}

impl PlayArgs {
    /// Session settings from the flags.
    pub(crate) fn settings(&self) -> Settings {
        Settings {
            return_delay: Duration::from_millis(self.return_delay_ms),
            history_len: self.history,
        }
    }
}

/// Initialize `env_logger` with `default_filter` unless `RUST_LOG` says
/// otherwise. Logs go to `file` when given, stderr otherwise.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub(crate) fn init_logging(default_filter: &str, file: Option<&Path>) -> Result<(), CliError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = file {
        let target = File::create(path)
            .map_err(|e| CliError::new(format!("Failed to create {}: {e}", path.display())))?;
        builder.target(env_logger::Target::Pipe(Box::new(target)));
    }
    // A logger may already be installed when commands run inside one process
    let _ = builder.try_init();
    Ok(())
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<tactician::ScriptError> for CliError {
    fn from(e: tactician::ScriptError) -> Self {
        Self::new(e.to_string())
    }
}
