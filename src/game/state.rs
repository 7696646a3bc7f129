//! Match state management.

use crate::game::{ActionLog, AmmoPool, Player, Roster};

/// Everything a match mutates: players, shells and history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    /// All players in the match, eliminated ones included.
    pub roster: Roster,
    /// Remaining shells.
    pub ammo: AmmoPool,
    /// Every resolved action.
    pub log: ActionLog,
}

impl MatchState {
    /// Create a match state with an empty history.
    #[must_use]
    pub fn new(roster: Roster, ammo: AmmoPool) -> Self {
        Self {
            roster,
            ammo,
            log: ActionLog::new(),
        }
    }

    /// Check if the match is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        // Match ends when one player (or none) is left standing
        if self.roster.alive_count() <= 1 {
            return true;
        }

        // Match ends when the magazine is empty
        self.ammo.total_remaining() == 0
    }

    /// The last player standing, if exactly one remains.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let mut alive = self.roster.alive_players();
        let first = alive.next()?;
        alive.next().is_none().then_some(first)
    }

    /// The operator's health, zero if the roster has no operator.
    #[must_use]
    pub fn user_health(&self) -> u8 {
        self.roster.user().map_or(0, |p| p.health)
    }
}
