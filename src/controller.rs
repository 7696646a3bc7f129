//! Match controller: owns a running match and decides when it ends.
//!
//! When the match ends (one player or none left, or an empty magazine) the
//! controller arms a one-shot [`AutoReturn`]. The host polls it with the
//! current time; it fires once and then disarms. The timer lives inside the
//! controller, so replacing or dropping the controller cancels it.

use std::time::{Duration, Instant};

use crate::advice::{Advice, recommend};
use crate::command::Command;
use crate::game::{ActionEntry, MatchState};
use crate::settings::Settings;
use crate::setup::MatchConfig;
use crate::turn::{TurnEngine, TurnOutcome};

/// A scheduled return to setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoReturn {
    deadline: Instant,
}

impl AutoReturn {
    /// Schedule a return `delay` after `now`.
    #[must_use]
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    /// Whether the return is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the return fires.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// Result of feeding a command to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The match continues; `changed` is false when the command was ignored.
    Continue {
        /// Whether anything changed.
        changed: bool,
    },
    /// The operator left the match; return to setup.
    Leave,
}

/// Owner of a running match.
#[derive(Debug, Clone)]
pub struct MatchController {
    state: MatchState,
    turn: TurnEngine,
    auto_return: Option<AutoReturn>,
    settings: Settings,
}

impl MatchController {
    /// Start a match from a completed setup.
    #[must_use]
    pub fn new(config: MatchConfig, settings: Settings) -> Self {
        let (roster, ammo) = config.into_parts();
        log::info!(
            "match started: {} players, {} live / {} blank",
            roster.len(),
            ammo.live(),
            ammo.blank()
        );
        Self {
            state: MatchState::new(roster, ammo),
            turn: TurnEngine::new(),
            auto_return: None,
            settings,
        }
    }

    /// The match being played.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The turn in progress.
    #[must_use]
    pub fn turn(&self) -> &TurnEngine {
        &self.turn
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The pending return to setup, if the match has ended.
    #[must_use]
    pub fn auto_return(&self) -> Option<&AutoReturn> {
        self.auto_return.as_ref()
    }

    /// Advice for the current state, computed fresh.
    #[must_use]
    pub fn recommendation(&self) -> Advice {
        recommend(&self.state)
    }

    /// The most recent history entries, as many as the settings allow.
    #[must_use]
    pub fn recent_actions(&self) -> &[ActionEntry] {
        self.state.log.recent(self.settings.history_len)
    }

    /// Apply one command at time `now`.
    ///
    /// Once the match is over only [`Command::Cancel`] is honoured; the
    /// final state stays frozen until the auto-return fires.
    pub fn handle(&mut self, command: Command, now: Instant) -> MatchOutcome {
        if self.state.is_over() && command != Command::Cancel {
            return MatchOutcome::Continue { changed: false };
        }
        let outcome = match self.turn.handle(command, &mut self.state) {
            TurnOutcome::Exit => {
                log::debug!("match: operator left the match view");
                return MatchOutcome::Leave;
            }
            TurnOutcome::Ignored => MatchOutcome::Continue { changed: false },
            TurnOutcome::Moved | TurnOutcome::Recorded => MatchOutcome::Continue { changed: true },
        };
        self.check_end(now);
        outcome
    }

    /// Arm the auto-return if the match has just ended.
    fn check_end(&mut self, now: Instant) {
        if self.auto_return.is_none() && self.state.is_over() {
            log::info!("match over: {}", self.recommendation().message);
            self.auto_return = Some(AutoReturn::arm(now, self.settings.return_delay));
        }
    }

    /// Fire the auto-return if it is due. Returns `true` exactly once.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.auto_return {
            Some(timer) if timer.is_due(now) => {
                self.auto_return = None;
                true
            }
            _ => false,
        }
    }

    /// Cancel a pending auto-return.
    pub fn disarm(&mut self) {
        if self.auto_return.take().is_some() {
            log::debug!("match: auto-return disarmed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AmmoPool, Roster};

    fn controller(health: u8, live: u8, blank: u8) -> MatchController {
        let mut roster = Roster::create_players(2, "ACE");
        roster.set_health(1, health);
        roster.set_health(2, health);
        let config = MatchConfig::try_new(roster, AmmoPool::new(live, blank)).unwrap();
        MatchController::new(config, Settings::default())
    }

    fn shoot(controller: &mut MatchController, target_down: bool, live: bool, now: Instant) {
        controller.handle(Command::Confirm, now);
        controller.handle(Command::Confirm, now);
        if target_down {
            controller.handle(Command::MoveDown, now);
        }
        controller.handle(Command::Confirm, now);
        if !live {
            controller.handle(Command::MoveDown, now);
        }
        controller.handle(Command::Confirm, now);
    }

    #[test]
    fn test_auto_return_after_elimination() {
        let now = Instant::now();
        let mut controller = controller(1, 2, 2);
        assert!(controller.auto_return().is_none());

        shoot(&mut controller, true, true, now);
        assert!(controller.is_over());
        assert!(controller.auto_return().is_some());
        assert_eq!(
            controller.recommendation().message,
            "GAME OVER - ACE WINS! Returning to setup..."
        );

        assert!(!controller.poll(now + Duration::from_millis(1999)));
        assert!(controller.poll(now + Duration::from_millis(2000)));
        // One-shot
        assert!(!controller.poll(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_auto_return_after_empty_magazine() {
        let now = Instant::now();
        let mut controller = controller(3, 1, 1);
        shoot(&mut controller, false, false, now);
        assert!(controller.auto_return().is_none());
        shoot(&mut controller, true, true, now);
        assert_eq!(controller.state().ammo.total_remaining(), 0);
        assert!(controller.auto_return().is_some());
        assert_eq!(
            controller.recommendation().message,
            "ACE: MISSION COMPLETE - Return to setup"
        );
    }

    #[test]
    fn test_disarm_prevents_firing() {
        let now = Instant::now();
        let mut controller = controller(1, 2, 2);
        shoot(&mut controller, true, true, now);
        controller.disarm();
        assert!(!controller.poll(now + Duration::from_secs(5)));
    }

    #[test]
    fn test_timer_armed_once() {
        let now = Instant::now();
        let mut controller = controller(1, 2, 2);
        shoot(&mut controller, true, true, now);
        let armed = *controller.auto_return().unwrap();

        // Later commands do not push the deadline back
        controller.handle(Command::MoveDown, now + Duration::from_millis(500));
        assert_eq!(controller.auto_return(), Some(&armed));
        assert_eq!(
            armed.remaining(now + Duration::from_millis(500)),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_finished_match_is_frozen() {
        let now = Instant::now();
        let mut controller = controller(1, 2, 2);
        shoot(&mut controller, true, true, now);
        assert!(controller.is_over());
        let log_len = controller.state().log.len();
        let live = controller.state().ammo.live();

        // ACE tries to shoot itself with the remaining live shell
        for command in [Command::Confirm; 4] {
            assert_eq!(
                controller.handle(command, now),
                MatchOutcome::Continue { changed: false }
            );
        }
        for command in [Command::MoveDown, Command::MoveLeft, Command::Digit(1), Command::Increment] {
            assert_eq!(
                controller.handle(command, now),
                MatchOutcome::Continue { changed: false }
            );
        }

        assert_eq!(controller.state().log.len(), log_len);
        assert_eq!(controller.state().ammo.live(), live);
        assert_eq!(controller.state().roster.user().unwrap().health, 1);
        assert_eq!(
            controller.recommendation().message,
            "GAME OVER - ACE WINS! Returning to setup..."
        );
        assert_eq!(controller.handle(Command::Cancel, now), MatchOutcome::Leave);
    }

    #[test]
    fn test_cancel_leaves() {
        let now = Instant::now();
        let mut controller = controller(3, 2, 2);
        assert_eq!(controller.handle(Command::Cancel, now), MatchOutcome::Leave);
        assert_eq!(
            controller.handle(Command::Digit(3), now),
            MatchOutcome::Continue { changed: false }
        );
    }

    #[test]
    fn test_recent_actions_limited() {
        let now = Instant::now();
        let mut controller = controller(6, 8, 8);
        for _ in 0..5 {
            shoot(&mut controller, false, false, now);
        }
        assert_eq!(controller.state().log.len(), 5);
        assert_eq!(controller.recent_actions().len(), 3);
    }
}
