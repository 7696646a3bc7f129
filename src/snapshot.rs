//! Read-only views handed to the presentation layer after every command.

use serde::Serialize;

use crate::advice::Advice;
use crate::game::{ActionEntry, AmmoPool, Player};
use crate::setup::SetupView;
use crate::turn::TurnPhase;

/// Everything a renderer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Active screen and its step state.
    pub screen: ScreenView,
    /// Players created so far, in entry order.
    pub players: Vec<Player>,
    /// Shell counts, once the match has started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammo: Option<AmmoView>,
    /// Most recent history entries, oldest first.
    pub recent_actions: Vec<ActionEntry>,
    /// Current advice, once the match has started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Advice>,
}

/// Per-screen state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    /// Callsign entry.
    Callsign {
        /// Text typed so far.
        text: String,
        /// Whether the text would be accepted.
        can_confirm: bool,
    },
    /// The setup wizard.
    Setup(SetupView),
    /// A match in progress.
    Match(MatchView),
}

/// State of the turn being entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    /// Active turn step.
    pub phase: TurnPhase,
    /// Name of the chosen actor.
    pub actor: Option<String>,
    /// Name of the chosen target.
    pub target: Option<String>,
    /// Highlighted option.
    pub cursor: usize,
    /// Labels of the selectable options.
    pub options: Vec<String>,
    /// Whether the match has ended.
    pub over: bool,
    /// Whether a return to setup is scheduled.
    pub returning: bool,
}

/// Shell counts with display percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AmmoView {
    /// Remaining live rounds.
    pub live: u8,
    /// Remaining blank rounds.
    pub blank: u8,
    /// Live rounds loaded at setup.
    pub initial_live: u8,
    /// Blank rounds loaded at setup.
    pub initial_blank: u8,
    /// Rounds left.
    pub total: u8,
    /// Live share, rounded to a whole percent.
    pub live_percent: u8,
    /// Blank share, rounded to a whole percent.
    pub blank_percent: u8,
}

impl From<&AmmoPool> for AmmoView {
    fn from(ammo: &AmmoPool) -> Self {
        Self {
            live: ammo.live(),
            blank: ammo.blank(),
            initial_live: ammo.initial_live(),
            initial_blank: ammo.initial_blank(),
            total: ammo.total_remaining(),
            live_percent: ammo.live_display_percent(),
            blank_percent: ammo.blank_display_percent(),
        }
    }
}
