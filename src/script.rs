//! Command scripts: a line-oriented file of commands for headless runs.
//!
//! One or more whitespace-separated tokens per line; `#` starts a comment.
//!
//! ```text
//! # callsign
//! text ace
//! confirm
//! 3 confirm          # three players
//! wait 2000          # let the auto-return fire
//! ```
//!
//! `text` consumes the rest of the line (comments excepted), typing one
//! character per command, spaces included. `wait <ms>` advances the clock.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::command::Command;
use crate::error::ScriptError;

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Feed a command to the session.
    Command(Command),
    /// Advance the clock.
    Wait(Duration),
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Parse a script from source text.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Parse`] with the 1-based line number of the
    /// first token that is not a command.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let code = raw.split_once('#').map_or(raw, |(code, _)| code);
            let mut rest = code.trim_start();

            while !rest.is_empty() {
                let (token, tail) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));

                match token.to_ascii_lowercase().as_str() {
                    "text" => {
                        steps.extend(tail.trim().chars().map(|c| Step::Command(Command::TextChar(c))));
                        break;
                    }
                    "wait" => {
                        let (value, after) = tail
                            .trim_start()
                            .split_once(char::is_whitespace)
                            .unwrap_or((tail.trim(), ""));
                        let ms: u64 = value.parse().map_err(|_| ScriptError::Parse {
                            line,
                            message: format!("invalid wait duration {value:?}"),
                        })?;
                        steps.push(Step::Wait(Duration::from_millis(ms)));
                        rest = after.trim_start();
                        continue;
                    }
                    _ => {
                        let command = token.parse::<Command>().map_err(|e| ScriptError::Parse {
                            line,
                            message: e.to_string(),
                        })?;
                        steps.push(Step::Command(command));
                    }
                }
                rest = tail.trim_start();
            }
        }

        log::debug!("script: parsed {} steps", steps.len());
        Ok(Self { steps })
    }

    /// Read and parse a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the script has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
