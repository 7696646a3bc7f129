//! Error types for the fallible edges of the crate.
//!
//! The engine itself never fails: invalid input is ignored. Errors only
//! arise when building a match outside the wizard or reading scripts.

use std::fmt;
use std::io;

use crate::game::{PlayerId, Shell};

/// A command token that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError {
    token: String,
}

impl ParseCommandError {
    /// Create a new parse error for `token`.
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command {:?}", self.token)
    }
}

impl std::error::Error for ParseCommandError {}

/// Reasons a match configuration is not playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Fewer than two or more than eight players.
    PlayerCount(usize),
    /// A player's health was never set.
    HealthUnset(PlayerId),
    /// The roster does not have exactly one operator listed first.
    NoOperator,
    /// One shell kind has no rounds loaded.
    EmptyAmmo(Shell),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerCount(n) => write!(f, "a match needs 2-8 players, got {n}"),
            Self::HealthUnset(id) => write!(f, "player {id} has no health set"),
            Self::NoOperator => write!(f, "the first player must be the operator"),
            Self::EmptyAmmo(shell) => {
                write!(f, "both ammo types must be greater than 0 ({shell} is empty)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error type for loading command scripts.
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read.
    Io(io::Error),
    /// A line could not be parsed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read script: {e}"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
