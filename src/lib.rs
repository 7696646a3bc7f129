// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Tactician: a tactical assistant for a shotgun-roulette table game.
//!
//! The operator mirrors a match played elsewhere: who sits at the table,
//! their health and items, and how many live and blank shells were loaded.
//! Each resolved action is entered as it happens, and the assistant keeps
//! the odds and a recommendation up to date.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Host: terminal UI / script runner │
//! ├─────────────────────────────────────┤
//! │   Session (callsign, setup, match)  │
//! ├─────────────────────────────────────┤
//! │   Setup wizard │ Turn engine │ Advice│
//! ├─────────────────────────────────────┤
//! │   Game state: roster, ammo, history │
//! └─────────────────────────────────────┘
//! ```
//!
//! Hosts translate input into [`Command`]s, feed them to a [`Session`]
//! together with the current time, and draw the returned [`Snapshot`].
//! The core never reads a clock or a terminal itself.

pub mod advice;
pub mod callsign;
pub mod command;
pub mod controller;
pub mod error;
pub mod game;
pub mod render;
pub mod script;
pub mod session;
pub mod settings;
pub mod setup;
pub mod snapshot;
pub mod turn;

pub use advice::{Advice, ThreatLevel, recommend};
pub use command::Command;
pub use controller::{AutoReturn, MatchController, MatchOutcome};
pub use error::{ConfigError, ParseCommandError, ScriptError};
pub use session::{Session, Signal};
pub use settings::Settings;
pub use setup::{MatchConfig, SetupWizard};
pub use snapshot::Snapshot;
pub use turn::TurnEngine;

// Re-export key game types at crate root for convenience
pub use game::{AmmoPool, Item, MatchState, Player, PlayerId, Roster, Shell};
