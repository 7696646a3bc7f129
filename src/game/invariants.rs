//! Match invariants - sanity checks that detect bugs.
//!
//! Every transition in the engine is guarded, so these should NEVER
//! trigger. They are used by the property tests and the fuzz target.

use std::collections::HashSet;

use crate::game::{
    MatchState, MAX_HEALTH, MAX_ITEM_QUANTITY, MAX_PLAYERS, MAX_SHELLS, MIN_PLAYERS,
};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all match invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &MatchState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut report = |message: String| violations.push(InvariantViolation { message });

    let players = state.roster.players();
    let count = players.len();
    if count < usize::from(MIN_PLAYERS) || count > usize::from(MAX_PLAYERS) {
        report(format!("Roster has {count} players, expected {MIN_PLAYERS}-{MAX_PLAYERS}"));
    }

    // Exactly one operator, and it is the first player
    let users = players.iter().filter(|p| p.is_user).count();
    if users != 1 {
        report(format!("Roster has {users} operators, expected exactly 1"));
    }
    if players.first().is_some_and(|p| !p.is_user) {
        report("First player is not the operator".to_string());
    }

    // Ids are unique and follow entry order
    let mut seen = HashSet::new();
    for (index, player) in players.iter().enumerate() {
        if !seen.insert(player.id) {
            report(format!("Duplicate player id {}", player.id));
        }
        if usize::from(player.id) != index + 1 {
            report(format!(
                "Player {} at position {index} breaks entry order",
                player.id
            ));
        }
        if player.health > MAX_HEALTH {
            report(format!(
                "Player {} has health {} > max {MAX_HEALTH}",
                player.id, player.health
            ));
        }
        for (item, &quantity) in &player.items {
            if quantity == 0 || quantity > MAX_ITEM_QUANTITY {
                report(format!(
                    "Player {} holds {quantity} of {item}, expected 1-{MAX_ITEM_QUANTITY}",
                    player.id
                ));
            }
        }
    }

    // Shells only ever decrease from what was loaded
    let ammo = &state.ammo;
    if ammo.live() > ammo.initial_live() || ammo.blank() > ammo.initial_blank() {
        report(format!(
            "Ammo {}/{} live, {}/{} blank exceeds loaded counts",
            ammo.live(),
            ammo.initial_live(),
            ammo.blank(),
            ammo.initial_blank()
        ));
    }
    if ammo.initial_live() > MAX_SHELLS || ammo.initial_blank() > MAX_SHELLS {
        report(format!("Loaded ammo exceeds cap of {MAX_SHELLS} per kind"));
    }

    violations
}
