//! Setup wizard: builds a match configuration one confirmed step at a time.
//!
//! Steps run strictly forward:
//!
//! ```text
//! PlayerCount → Naming → Health → Items → Ammo → complete
//! ```
//!
//! There is no way back. Every input outside a step's bounds is ignored.

use serde::Serialize;

use crate::command::Command;
use crate::error::ConfigError;
use crate::game::{
    AmmoPool, Item, MAX_HEALTH, MAX_ITEM_QUANTITY, MAX_PLAYERS, MAX_SHELLS, MIN_HEALTH,
    MIN_PLAYERS, Player, PlayerId, Roster, Shell,
};

/// A validated, playable match configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    roster: Roster,
    ammo: AmmoPool,
}

impl MatchConfig {
    /// Validate a roster and a loaded ammo pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster size is out of range, the first
    /// player is not the operator, any player has no health, or either
    /// shell kind is empty.
    pub fn try_new(roster: Roster, ammo: AmmoPool) -> Result<Self, ConfigError> {
        let count = roster.len();
        if count < usize::from(MIN_PLAYERS) || count > usize::from(MAX_PLAYERS) {
            return Err(ConfigError::PlayerCount(count));
        }
        let operators = roster.players().iter().filter(|p| p.is_user).count();
        if operators != 1 || roster.by_index(0).is_some_and(|p| !p.is_user) {
            return Err(ConfigError::NoOperator);
        }
        if let Some(player) = roster.players().iter().find(|p| p.health == 0) {
            return Err(ConfigError::HealthUnset(player.id));
        }
        for shell in [Shell::Live, Shell::Blank] {
            if ammo.count(shell) == 0 {
                return Err(ConfigError::EmptyAmmo(shell));
            }
        }
        Ok(Self { roster, ammo })
    }

    /// The configured players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The loaded shells.
    #[must_use]
    pub fn ammo(&self) -> AmmoPool {
        self.ammo
    }

    /// Split into roster and ammo.
    #[must_use]
    pub fn into_parts(self) -> (Roster, AmmoPool) {
        (self.roster, self.ammo)
    }
}

/// Which setup step is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupStep {
    /// Choosing how many players sit at the table.
    PlayerCount,
    /// Acknowledging each player's name.
    Naming,
    /// Entering each player's starting health.
    Health,
    /// Entering each player's starting items.
    Items,
    /// Loading the shotgun.
    Ammo,
}

/// Result of feeding a command to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Nothing changed.
    Ignored,
    /// The wizard's state changed.
    Updated,
    /// Setup finished; the wizard is spent.
    Complete(MatchConfig),
}

/// Read-only view of the wizard for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetupView {
    /// Active step.
    pub step: SetupStep,
    /// Chosen (or pending) player count.
    pub player_count: u8,
    /// Position of the player being configured.
    pub player_index: usize,
    /// Health being entered; zero while unset.
    pub health: u8,
    /// Highlighted catalog position on the items step.
    pub item_cursor: usize,
    /// Live rounds being loaded.
    pub live: u8,
    /// Blank rounds being loaded.
    pub blank: u8,
    /// Focused field on the ammo step.
    pub ammo_field: Shell,
    /// Whether `Confirm` would be accepted right now.
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    PlayerCount { count: u8 },
    Naming { roster: Roster, index: usize },
    Health { roster: Roster, index: usize, draft: u8 },
    Items { roster: Roster, index: usize, cursor: usize },
    Ammo { roster: Roster, ammo: AmmoPool, field: Shell },
    Done,
}

/// The setup state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupWizard {
    user_name: String,
    stage: Stage,
}

impl SetupWizard {
    /// Start setup for the operator `user_name`, at the player count step.
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            stage: Stage::PlayerCount { count: MIN_PLAYERS },
        }
    }

    /// The operator's callsign.
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Active step. A completed wizard reports `Ammo`.
    #[must_use]
    pub fn step(&self) -> SetupStep {
        match self.stage {
            Stage::PlayerCount { .. } => SetupStep::PlayerCount,
            Stage::Naming { .. } => SetupStep::Naming,
            Stage::Health { .. } => SetupStep::Health,
            Stage::Items { .. } => SetupStep::Items,
            Stage::Ammo { .. } | Stage::Done => SetupStep::Ammo,
        }
    }

    /// Players created so far; empty until the player count is confirmed.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        match &self.stage {
            Stage::Naming { roster, .. }
            | Stage::Health { roster, .. }
            | Stage::Items { roster, .. }
            | Stage::Ammo { roster, .. } => roster.players(),
            Stage::PlayerCount { .. } | Stage::Done => &[],
        }
    }

    /// Snapshot of the wizard for rendering.
    #[must_use]
    pub fn view(&self) -> SetupView {
        let mut view = SetupView {
            step: self.step(),
            player_count: u8::try_from(self.players().len()).unwrap_or(MAX_PLAYERS),
            player_index: 0,
            health: 0,
            item_cursor: 0,
            live: 0,
            blank: 0,
            ammo_field: Shell::Live,
            can_confirm: true,
        };
        match &self.stage {
            Stage::PlayerCount { count } => view.player_count = *count,
            Stage::Naming { index, .. } => view.player_index = *index,
            Stage::Health { index, draft, .. } => {
                view.player_index = *index;
                view.health = *draft;
                view.can_confirm = *draft >= MIN_HEALTH;
            }
            Stage::Items { index, cursor, .. } => {
                view.player_index = *index;
                view.item_cursor = *cursor;
            }
            Stage::Ammo { ammo, field, .. } => {
                view.live = ammo.live();
                view.blank = ammo.blank();
                view.ammo_field = *field;
                view.can_confirm = ammo.live() > 0 && ammo.blank() > 0;
            }
            Stage::Done => view.can_confirm = false,
        }
        view
    }

    /// Apply one command.
    #[allow(clippy::too_many_lines)]
    pub fn handle(&mut self, command: Command) -> SetupOutcome {
        let outcome = match &mut self.stage {
            Stage::PlayerCount { count } => match command {
                Command::Digit(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => {
                    set_if_changed(count, n)
                }
                Command::Increment | Command::MoveUp => {
                    set_if_changed(count, (*count + 1).min(MAX_PLAYERS))
                }
                Command::Decrement | Command::MoveDown => {
                    set_if_changed(count, count.saturating_sub(1).max(MIN_PLAYERS))
                }
                Command::Confirm => {
                    let roster = Roster::create_players(*count, &self.user_name);
                    log::debug!("setup: {} players created", roster.len());
                    self.stage = Stage::Naming { roster, index: 0 };
                    SetupOutcome::Updated
                }
                _ => SetupOutcome::Ignored,
            },
            Stage::Naming { roster, index } => match command {
                Command::Confirm => {
                    let next = *index + 1;
                    if next < roster.len() {
                        *index = next;
                    } else {
                        let roster = std::mem::take(roster);
                        self.stage = Stage::Health { roster, index: 0, draft: 0 };
                    }
                    SetupOutcome::Updated
                }
                _ => SetupOutcome::Ignored,
            },
            Stage::Health { roster, index, draft } => match command {
                Command::Digit(n) if (MIN_HEALTH..=MAX_HEALTH).contains(&n) => {
                    set_if_changed(draft, n)
                }
                Command::Increment | Command::MoveUp => {
                    set_if_changed(draft, (*draft + 1).clamp(MIN_HEALTH, MAX_HEALTH))
                }
                // An unset draft has nothing to step down from
                Command::Decrement | Command::MoveDown if *draft > 0 => {
                    set_if_changed(draft, draft.saturating_sub(1).max(MIN_HEALTH))
                }
                Command::Confirm if *draft >= MIN_HEALTH => {
                    let id = player_id_at(roster, *index);
                    roster.set_health(id, *draft);
                    let next = *index + 1;
                    if next < roster.len() {
                        *index = next;
                        *draft = 0;
                    } else {
                        let roster = std::mem::take(roster);
                        self.stage = Stage::Items { roster, index: 0, cursor: 0 };
                    }
                    SetupOutcome::Updated
                }
                _ => SetupOutcome::Ignored,
            },
            Stage::Items { roster, index, cursor } => match command {
                Command::Confirm => {
                    let next = *index + 1;
                    if next < roster.len() {
                        *index = next;
                        *cursor = 0;
                    } else {
                        let roster = std::mem::take(roster);
                        self.stage = Stage::Ammo {
                            roster,
                            ammo: AmmoPool::default(),
                            field: Shell::Live,
                        };
                    }
                    SetupOutcome::Updated
                }
                _ => edit_items(roster, *index, cursor, command),
            },
            Stage::Ammo { roster, ammo, field } => match command {
                Command::Digit(n) if n <= MAX_SHELLS => {
                    if ammo.count(*field) == n {
                        SetupOutcome::Ignored
                    } else {
                        ammo.set(*field, n);
                        SetupOutcome::Updated
                    }
                }
                Command::Increment | Command::MoveRight => adjust_ammo(ammo, *field, 1),
                Command::Decrement | Command::MoveLeft => adjust_ammo(ammo, *field, -1),
                Command::MoveUp if *field == Shell::Blank => {
                    *field = Shell::Live;
                    SetupOutcome::Updated
                }
                Command::MoveDown if *field == Shell::Live => {
                    *field = Shell::Blank;
                    SetupOutcome::Updated
                }
                Command::Confirm if ammo.live() > 0 && ammo.blank() > 0 => {
                    match MatchConfig::try_new(roster.clone(), *ammo) {
                        Ok(config) => {
                            log::info!(
                                "setup complete: {} players, {} live / {} blank",
                                config.roster().len(),
                                ammo.live(),
                                ammo.blank()
                            );
                            self.stage = Stage::Done;
                            SetupOutcome::Complete(config)
                        }
                        Err(e) => {
                            log::warn!("setup: configuration rejected: {e}");
                            SetupOutcome::Ignored
                        }
                    }
                }
                _ => SetupOutcome::Ignored,
            },
            Stage::Done => SetupOutcome::Ignored,
        };

        if outcome == SetupOutcome::Ignored {
            log::trace!("setup: ignored {command} at {:?}", self.step());
        }
        outcome
    }
}

fn edit_items(roster: &mut Roster, index: usize, cursor: &mut usize, command: Command) -> SetupOutcome {
    match command {
        Command::MoveUp if *cursor > 0 => {
            *cursor -= 1;
            return SetupOutcome::Updated;
        }
        Command::MoveDown if *cursor + 1 < Item::ALL.len() => {
            *cursor += 1;
            return SetupOutcome::Updated;
        }
        _ => {}
    }

    let id = player_id_at(roster, index);
    let Some(item) = Item::from_index(*cursor) else {
        return SetupOutcome::Ignored;
    };
    let before = roster.get(id).map(|p| p.item_quantity(item));
    match command {
        Command::Digit(n) if n <= MAX_ITEM_QUANTITY => roster.set_item_quantity(id, item, n),
        Command::Increment | Command::MoveRight => roster.increment_item(id, item),
        Command::Decrement | Command::MoveLeft => {
            roster.decrement_item(id, item);
        }
        _ => return SetupOutcome::Ignored,
    }

    if roster.get(id).map(|p| p.item_quantity(item)) == before {
        SetupOutcome::Ignored
    } else {
        SetupOutcome::Updated
    }
}

fn set_if_changed(slot: &mut u8, value: u8) -> SetupOutcome {
    if *slot == value {
        SetupOutcome::Ignored
    } else {
        *slot = value;
        SetupOutcome::Updated
    }
}

fn adjust_ammo(ammo: &mut AmmoPool, field: Shell, delta: i8) -> SetupOutcome {
    let before = ammo.count(field);
    ammo.adjust(field, delta);
    if ammo.count(field) == before {
        SetupOutcome::Ignored
    } else {
        SetupOutcome::Updated
    }
}

fn player_id_at(roster: &Roster, index: usize) -> PlayerId {
    roster.by_index(index).map_or(0, |p| p.id)
}
