//! Game layer for the tactical assistant.
//!
//! Holds the state a match mutates:
//! - Ammo pool (remaining live and blank shells)
//! - Players with health and item inventories
//! - The append-only action history
//! - Invariant checks over all of the above

mod ammo;
mod history;
mod invariants;
mod item;
mod player;
mod roster;
mod state;

pub use ammo::{AmmoPool, MAX_SHELLS, Shell};
pub use history::{ActionEntry, ActionKind, ActionLog};
pub use invariants::{InvariantViolation, check_invariants};
pub use item::{Item, MAX_ITEM_QUANTITY};
pub use player::{Player, PlayerId};
pub use roster::{MAX_HEALTH, MAX_PLAYERS, MIN_HEALTH, MIN_PLAYERS, Roster};
pub use state::MatchState;
