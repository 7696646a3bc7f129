//! Turn engine: records one resolved action per cycle.
//!
//! ```text
//! SelectActor → SelectActionKind ─┬─ shoot ─→ SelectTarget → SelectOutcome ─┐
//!                                 └─ item ──→ SelectItem ───────────────────┤
//!      ↑                                                                     │
//!      └──────────────────── append to history ─────────────────────────────┘
//! ```
//!
//! The in-flight action is a tagged state, so only the fields a step needs
//! exist in it: an outcome can never be set while a target is still being
//! chosen.

use serde::Serialize;

use crate::command::Command;
use crate::game::{ActionEntry, MatchState, PlayerId, Shell};

/// Which step of the turn is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Choosing who acts.
    SelectActor,
    /// Choosing between shooting and using an item.
    SelectActionKind,
    /// Choosing who is shot at.
    SelectTarget,
    /// Choosing which item is used.
    SelectItem,
    /// Declaring which shell was fired.
    SelectOutcome,
}

/// The two things a player can do on a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionChoice {
    Shoot,
    UseItem,
}

const ACTION_CHOICES: [ActionChoice; 2] = [ActionChoice::Shoot, ActionChoice::UseItem];

/// Shells that can still be declared: a kind with none left is not offered.
fn possible_outcomes(state: &MatchState) -> Vec<Shell> {
    [Shell::Live, Shell::Blank]
        .into_iter()
        .filter(|&shell| state.ammo.count(shell) > 0)
        .collect()
}

/// The in-flight action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    SelectActor { cursor: usize },
    SelectActionKind { actor: PlayerId, cursor: usize },
    SelectTarget { actor: PlayerId, cursor: usize },
    SelectItem { actor: PlayerId, cursor: usize },
    SelectOutcome { actor: PlayerId, target: PlayerId, cursor: usize },
}

impl TurnState {
    const fn start() -> Self {
        TurnState::SelectActor { cursor: 0 }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self {
            TurnState::SelectActor { cursor }
            | TurnState::SelectActionKind { cursor, .. }
            | TurnState::SelectTarget { cursor, .. }
            | TurnState::SelectItem { cursor, .. }
            | TurnState::SelectOutcome { cursor, .. } => cursor,
        }
    }
}

/// Result of feeding a command to the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing changed.
    Ignored,
    /// The selection or step changed; nothing was recorded.
    Moved,
    /// An action was resolved and appended to the history.
    Recorded,
    /// The operator backed out of the match view.
    Exit,
}

/// The turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnEngine {
    state: TurnState,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    /// Create an engine waiting for an actor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TurnState::start(),
        }
    }

    /// Active step.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        match self.state {
            TurnState::SelectActor { .. } => TurnPhase::SelectActor,
            TurnState::SelectActionKind { .. } => TurnPhase::SelectActionKind,
            TurnState::SelectTarget { .. } => TurnPhase::SelectTarget,
            TurnState::SelectItem { .. } => TurnPhase::SelectItem,
            TurnState::SelectOutcome { .. } => TurnPhase::SelectOutcome,
        }
    }

    /// Highlighted option in the active step.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        match self.state {
            TurnState::SelectActor { cursor }
            | TurnState::SelectActionKind { cursor, .. }
            | TurnState::SelectTarget { cursor, .. }
            | TurnState::SelectItem { cursor, .. }
            | TurnState::SelectOutcome { cursor, .. } => cursor,
        }
    }

    /// The chosen actor, once one is confirmed.
    #[must_use]
    pub const fn actor(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::SelectActor { .. } => None,
            TurnState::SelectActionKind { actor, .. }
            | TurnState::SelectTarget { actor, .. }
            | TurnState::SelectItem { actor, .. }
            | TurnState::SelectOutcome { actor, .. } => Some(actor),
        }
    }

    /// The chosen target, once one is confirmed.
    #[must_use]
    pub const fn target(&self) -> Option<PlayerId> {
        match self.state {
            TurnState::SelectOutcome { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Labels of the options in the active step, in display order.
    #[must_use]
    pub fn options(&self, state: &MatchState) -> Vec<String> {
        match self.state {
            TurnState::SelectActor { .. } | TurnState::SelectTarget { .. } => state
                .roster
                .players()
                .iter()
                .map(|p| format!("{} (Health: {})", p.name, p.health))
                .collect(),
            TurnState::SelectActionKind { .. } => ACTION_CHOICES
                .iter()
                .map(|choice| match choice {
                    ActionChoice::Shoot => "Shoot".to_string(),
                    ActionChoice::UseItem => "Use Item".to_string(),
                })
                .collect(),
            TurnState::SelectItem { actor, .. } => state
                .roster
                .available_items(actor)
                .into_iter()
                .map(|(item, quantity)| format!("[{quantity}x] {item}"))
                .collect(),
            TurnState::SelectOutcome { .. } => possible_outcomes(state)
                .into_iter()
                .map(|shell| match shell {
                    Shell::Live => "LIVE ROUND [DAMAGE]".to_string(),
                    Shell::Blank => "BLANK ROUND [SAFE]".to_string(),
                })
                .collect(),
        }
    }

    fn option_count(&self, state: &MatchState) -> usize {
        match self.state {
            TurnState::SelectActor { .. } | TurnState::SelectTarget { .. } => state.roster.len(),
            TurnState::SelectActionKind { .. } => ACTION_CHOICES.len(),
            TurnState::SelectItem { actor, .. } => state.roster.available_items(actor).len(),
            TurnState::SelectOutcome { .. } => possible_outcomes(state).len(),
        }
    }

    /// Apply one command to the match.
    pub fn handle(&mut self, command: Command, state: &mut MatchState) -> TurnOutcome {
        match command {
            Command::Cancel => TurnOutcome::Exit,
            Command::MoveUp => {
                let cursor = self.state.cursor_mut();
                if *cursor == 0 {
                    return TurnOutcome::Ignored;
                }
                *cursor -= 1;
                TurnOutcome::Moved
            }
            Command::MoveDown => {
                let count = self.option_count(state);
                let cursor = self.state.cursor_mut();
                if *cursor + 1 >= count {
                    return TurnOutcome::Ignored;
                }
                *cursor += 1;
                TurnOutcome::Moved
            }
            Command::MoveLeft => {
                if self.phase() == TurnPhase::SelectActor {
                    return TurnOutcome::Ignored;
                }
                log::debug!("turn: abandoned {:?}", self.phase());
                self.state = TurnState::start();
                TurnOutcome::Moved
            }
            Command::Confirm => self.confirm(state),
            _ => TurnOutcome::Ignored,
        }
    }

    fn confirm(&mut self, state: &mut MatchState) -> TurnOutcome {
        match self.state {
            TurnState::SelectActor { cursor } => {
                let Some(actor) = state.roster.by_index(cursor) else {
                    return TurnOutcome::Ignored;
                };
                self.state = TurnState::SelectActionKind {
                    actor: actor.id,
                    cursor: 0,
                };
                TurnOutcome::Moved
            }
            TurnState::SelectActionKind { actor, cursor } => {
                self.state = match ACTION_CHOICES.get(cursor) {
                    Some(ActionChoice::Shoot) => TurnState::SelectTarget { actor, cursor: 0 },
                    Some(ActionChoice::UseItem) => TurnState::SelectItem { actor, cursor: 0 },
                    None => return TurnOutcome::Ignored,
                };
                TurnOutcome::Moved
            }
            TurnState::SelectTarget { actor, cursor } => {
                let Some(target) = state.roster.by_index(cursor) else {
                    return TurnOutcome::Ignored;
                };
                self.state = TurnState::SelectOutcome {
                    actor,
                    target: target.id,
                    cursor: 0,
                };
                TurnOutcome::Moved
            }
            TurnState::SelectItem { actor, cursor } => {
                let Some(&(item, _)) = state.roster.available_items(actor).get(cursor) else {
                    return TurnOutcome::Ignored;
                };
                let Some(name) = state.roster.get(actor).map(|p| p.name.clone()) else {
                    return TurnOutcome::Ignored;
                };
                state.roster.decrement_item(actor, item);
                state.log.append(ActionEntry::item_use(name, item));
                self.state = TurnState::start();
                TurnOutcome::Recorded
            }
            TurnState::SelectOutcome { actor, target, cursor } => {
                let Some(&outcome) = possible_outcomes(state).get(cursor) else {
                    return TurnOutcome::Ignored;
                };
                let names = state
                    .roster
                    .get(actor)
                    .zip(state.roster.get(target))
                    .map(|(a, t)| (a.name.clone(), t.name.clone()));
                let Some((actor_name, target_name)) = names else {
                    return TurnOutcome::Ignored;
                };
                state.ammo.resolve_draw(outcome);
                if outcome == Shell::Live {
                    state.roster.apply_damage(target, 1);
                }
                state
                    .log
                    .append(ActionEntry::shot(actor_name, target_name, outcome));
                self.state = TurnState::start();
                TurnOutcome::Recorded
            }
        }
    }
}
