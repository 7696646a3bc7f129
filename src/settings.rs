//! Tunables for a session.

use std::time::Duration;

/// Default delay before an ended match returns to setup.
pub const DEFAULT_RETURN_DELAY: Duration = Duration::from_millis(2000);

/// Default number of history entries shown to the operator.
pub const DEFAULT_HISTORY_LEN: usize = 3;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How long an ended match stays on screen before returning to setup.
    pub return_delay: Duration,
    /// How many recent actions a snapshot carries.
    pub history_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            return_delay: DEFAULT_RETURN_DELAY,
            history_len: DEFAULT_HISTORY_LEN,
        }
    }
}
