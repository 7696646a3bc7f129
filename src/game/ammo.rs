//! Shell accounting for a match.
//!
//! The pool only knows how many live and blank rounds remain; it never
//! knows their order. Percentages are exact fractions; rounding happens
//! only in the `*_display_percent` helpers.

use std::fmt;

use serde::Serialize;

/// Most shells of one kind a match can be loaded with.
pub const MAX_SHELLS: u8 = 8;

/// Kind of shotgun shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    /// Deals damage when fired.
    Live,
    /// Deals no damage when fired.
    Blank,
}

impl Shell {
    /// Lowercase label used in logs and history lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shell::Live => "live",
            Shell::Blank => "blank",
        }
    }

    /// The other shell kind.
    #[must_use]
    pub const fn other(self) -> Shell {
        match self {
            Shell::Live => Shell::Blank,
            Shell::Blank => Shell::Live,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Remaining and initial shell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmmoPool {
    live: u8,
    blank: u8,
    initial_live: u8,
    initial_blank: u8,
}

impl AmmoPool {
    /// Create a pool loaded with the given counts.
    ///
    /// Counts above [`MAX_SHELLS`] are clamped.
    #[must_use]
    pub fn new(live: u8, blank: u8) -> Self {
        let live = live.min(MAX_SHELLS);
        let blank = blank.min(MAX_SHELLS);
        Self {
            live,
            blank,
            initial_live: live,
            initial_blank: blank,
        }
    }

    /// Step one count by `delta`, clamped to `[0, MAX_SHELLS]`.
    ///
    /// Only meaningful before the match starts: the loaded count moves
    /// together with the remaining count.
    pub fn adjust(&mut self, shell: Shell, delta: i8) {
        let current = i16::from(self.count(shell));
        let next = (current + i16::from(delta)).clamp(0, i16::from(MAX_SHELLS));
        // Clamped into [0, MAX_SHELLS] above.
        let next = u8::try_from(next).unwrap_or(0);
        self.load(shell, next);
    }

    /// Set one count directly. Values above [`MAX_SHELLS`] are ignored.
    ///
    /// Returns `true` if the value was accepted.
    pub fn set(&mut self, shell: Shell, value: u8) -> bool {
        if value > MAX_SHELLS {
            return false;
        }
        self.load(shell, value);
        true
    }

    fn load(&mut self, shell: Shell, value: u8) {
        match shell {
            Shell::Live => {
                self.live = value;
                self.initial_live = value;
            }
            Shell::Blank => {
                self.blank = value;
                self.initial_blank = value;
            }
        }
    }

    /// Record that a shell of the given kind was fired.
    ///
    /// Does nothing if that kind is already exhausted. Returns `true` if a
    /// shell was consumed.
    pub fn resolve_draw(&mut self, shell: Shell) -> bool {
        let count = match shell {
            Shell::Live => &mut self.live,
            Shell::Blank => &mut self.blank,
        };
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Remaining live rounds.
    #[must_use]
    pub const fn live(&self) -> u8 {
        self.live
    }

    /// Remaining blank rounds.
    #[must_use]
    pub const fn blank(&self) -> u8 {
        self.blank
    }

    /// Live rounds loaded at setup.
    #[must_use]
    pub const fn initial_live(&self) -> u8 {
        self.initial_live
    }

    /// Blank rounds loaded at setup.
    #[must_use]
    pub const fn initial_blank(&self) -> u8 {
        self.initial_blank
    }

    /// Remaining rounds of one kind.
    #[must_use]
    pub const fn count(&self, shell: Shell) -> u8 {
        match shell {
            Shell::Live => self.live,
            Shell::Blank => self.blank,
        }
    }

    /// Total rounds left in the magazine.
    #[must_use]
    pub const fn total_remaining(&self) -> u8 {
        self.live + self.blank
    }

    /// Exact live share of the remaining rounds, in percent.
    #[must_use]
    pub fn live_percentage(&self) -> f64 {
        self.percentage(self.live)
    }

    /// Exact blank share of the remaining rounds, in percent.
    #[must_use]
    pub fn blank_percentage(&self) -> f64 {
        self.percentage(self.blank)
    }

    fn percentage(&self, count: u8) -> f64 {
        let total = self.total_remaining();
        if total == 0 {
            return 0.0;
        }
        f64::from(count) * 100.0 / f64::from(total)
    }

    /// Live share rounded half-up to a whole percent.
    #[must_use]
    pub fn live_display_percent(&self) -> u8 {
        self.display_percent(self.live)
    }

    /// Blank share rounded half-up to a whole percent.
    #[must_use]
    pub fn blank_display_percent(&self) -> u8 {
        self.display_percent(self.blank)
    }

    fn display_percent(&self, count: u8) -> u8 {
        let total = u16::from(self.total_remaining());
        if total == 0 {
            return 0;
        }
        let rounded = (u16::from(count) * 100 + total / 2) / total;
        u8::try_from(rounded).unwrap_or(100)
    }

    /// Whether the live share is strictly above `percent`.
    ///
    /// Compares exact ratios, so no rounding can flip the answer.
    #[must_use]
    pub fn live_share_above(&self, percent: u8) -> bool {
        u16::from(self.live) * 100 > u16::from(percent) * u16::from(self.total_remaining())
    }

    /// Whether the live share is strictly below `percent`.
    #[must_use]
    pub fn live_share_below(&self, percent: u8) -> bool {
        u16::from(self.live) * 100 < u16::from(percent) * u16::from(self.total_remaining())
    }
}
