//! Abstract operator commands.
//!
//! The host decodes raw input (keys, script lines) into these; the engine
//! never sees a key code.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseCommandError;

/// One decoded operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the selection up.
    MoveUp,
    /// Move the selection down.
    MoveDown,
    /// Move left; adjusts a value down or steps back out of an action.
    MoveLeft,
    /// Move right; adjusts a value up.
    MoveRight,
    /// Confirm the current step.
    Confirm,
    /// Leave the current view.
    Cancel,
    /// A digit key, `0`-`9`.
    Digit(u8),
    /// Step the focused value up by one.
    Increment,
    /// Step the focused value down by one.
    Decrement,
    /// A typed character for text entry.
    TextChar(char),
    /// Delete the last typed character.
    TextBackspace,
    /// The operator wants to exit the program.
    Quit,
}

impl Command {
    /// Command for a digit, if `n` is a single decimal digit.
    #[must_use]
    pub const fn digit(n: u8) -> Option<Command> {
        if n <= 9 { Some(Command::Digit(n)) } else { None }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveUp => f.write_str("up"),
            Command::MoveDown => f.write_str("down"),
            Command::MoveLeft => f.write_str("left"),
            Command::MoveRight => f.write_str("right"),
            Command::Confirm => f.write_str("confirm"),
            Command::Cancel => f.write_str("cancel"),
            Command::Digit(n) => write!(f, "{n}"),
            Command::Increment => f.write_str("+"),
            Command::Decrement => f.write_str("-"),
            Command::TextChar(c) => write!(f, "char {c:?}"),
            Command::TextBackspace => f.write_str("backspace"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

/// Parses a single command token such as `up`, `confirm` or `7`.
///
/// Text entry is not a single token; scripts spell it `text ACE`.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let command = match token.as_str() {
            "up" => Command::MoveUp,
            "down" => Command::MoveDown,
            "left" => Command::MoveLeft,
            "right" => Command::MoveRight,
            "confirm" | "enter" => Command::Confirm,
            "cancel" | "esc" | "back" => Command::Cancel,
            "+" | "inc" | "increment" => Command::Increment,
            "-" | "dec" | "decrement" => Command::Decrement,
            "backspace" => Command::TextBackspace,
            "quit" => Command::Quit,
            _ => match token.as_bytes() {
                [d @ b'0'..=b'9'] => Command::Digit(d - b'0'),
                _ => return Err(ParseCommandError::new(s.trim())),
            },
        };
        Ok(command)
    }
}
