//! Top-level session: callsign entry, then setup and matches in a loop.
//!
//! ```text
//! Callsign → Setup → Match ─┐
//!              ↑            │ cancel, or auto-return after the match ends
//!              └────────────┘
//! ```
//!
//! The callsign survives every return to setup; the roster does not.

use std::time::Instant;

use crate::callsign::{CallsignInput, CallsignOutcome, normalize};
use crate::command::Command;
use crate::controller::{MatchController, MatchOutcome};
use crate::settings::Settings;
use crate::setup::{SetupOutcome, SetupWizard};
use crate::snapshot::{AmmoView, MatchView, ScreenView, Snapshot};

/// What the host should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// The operator asked to exit.
    Exit,
}

#[derive(Debug, Clone)]
enum Mode {
    Callsign(CallsignInput),
    Setup(SetupWizard),
    Match(Box<MatchController>),
}

/// One run of the assistant.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    mode: Mode,
}

impl Session {
    /// Start at callsign entry.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            mode: Mode::Callsign(CallsignInput::new()),
        }
    }

    /// Start directly at setup with a callsign given up front.
    ///
    /// Returns `None` if the callsign is not valid.
    #[must_use]
    pub fn with_callsign(callsign: &str, settings: Settings) -> Option<Self> {
        let name = normalize(callsign)?;
        Some(Self {
            settings,
            mode: Mode::Setup(SetupWizard::new(name)),
        })
    }

    /// Session settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the active screen takes free text.
    #[must_use]
    pub fn accepts_text(&self) -> bool {
        matches!(self.mode, Mode::Callsign(_))
    }

    /// The setup wizard, while setting up.
    #[must_use]
    pub fn wizard(&self) -> Option<&SetupWizard> {
        match &self.mode {
            Mode::Setup(wizard) => Some(wizard),
            _ => None,
        }
    }

    /// The running match, while playing.
    #[must_use]
    pub fn controller(&self) -> Option<&MatchController> {
        match &self.mode {
            Mode::Match(controller) => Some(controller.as_ref()),
            _ => None,
        }
    }

    /// Apply one command at time `now`.
    pub fn handle(&mut self, command: Command, now: Instant) -> Signal {
        if command == Command::Quit {
            log::info!("operator requested exit");
            return Signal::Exit;
        }

        match &mut self.mode {
            Mode::Callsign(input) => {
                if let CallsignOutcome::Submitted(name) = input.handle(command) {
                    log::info!("callsign set: {name}");
                    self.mode = Mode::Setup(SetupWizard::new(name));
                }
            }
            Mode::Setup(wizard) => {
                if let SetupOutcome::Complete(config) = wizard.handle(command) {
                    self.mode = Mode::Match(Box::new(MatchController::new(config, self.settings)));
                }
            }
            Mode::Match(controller) => {
                if controller.handle(command, now) == MatchOutcome::Leave {
                    self.return_to_setup();
                }
            }
        }
        Signal::Continue
    }

    /// Advance time to `now`. Returns `true` if an ended match returned to
    /// setup.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match &mut self.mode {
            Mode::Match(controller) => controller.poll(now),
            _ => false,
        };
        if due {
            self.return_to_setup();
        }
        due
    }

    fn return_to_setup(&mut self) {
        let name = match &self.mode {
            Mode::Match(controller) => controller
                .state()
                .roster
                .user()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            Mode::Setup(wizard) => wizard.user_name().to_string(),
            Mode::Callsign(_) => return,
        };
        log::debug!("returning to setup");
        // Dropping the controller drops any pending auto-return with it
        self.mode = Mode::Setup(SetupWizard::new(name));
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        match &self.mode {
            Mode::Callsign(input) => Snapshot {
                screen: ScreenView::Callsign {
                    text: input.text().to_string(),
                    can_confirm: input.can_submit(),
                },
                players: Vec::new(),
                ammo: None,
                recent_actions: Vec::new(),
                recommendation: None,
            },
            Mode::Setup(wizard) => Snapshot {
                screen: ScreenView::Setup(wizard.view()),
                players: wizard.players().to_vec(),
                ammo: None,
                recent_actions: Vec::new(),
                recommendation: None,
            },
            Mode::Match(controller) => {
                let state = controller.state();
                let turn = controller.turn();
                let name_of = |id| state.roster.get(id).map(|p| p.name.clone());
                Snapshot {
                    screen: ScreenView::Match(MatchView {
                        phase: turn.phase(),
                        actor: turn.actor().and_then(name_of),
                        target: turn.target().and_then(name_of),
                        cursor: turn.cursor(),
                        options: turn.options(state),
                        over: controller.is_over(),
                        returning: controller.auto_return().is_some(),
                    }),
                    players: state.roster.players().to_vec(),
                    ammo: Some(AmmoView::from(&state.ammo)),
                    recent_actions: controller.recent_actions().to_vec(),
                    recommendation: Some(controller.recommendation()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::SetupStep;
    use crate::turn::TurnPhase;
    use std::time::Duration;

    fn press(session: &mut Session, commands: &[Command], now: Instant) {
        for &command in commands {
            session.handle(command, now);
        }
    }

    fn type_text(session: &mut Session, text: &str, now: Instant) {
        for c in text.chars() {
            session.handle(Command::TextChar(c), now);
        }
    }

    const QUICK_SETUP: [Command; 13] = [
        Command::Confirm,
        Command::Confirm,
        Command::Confirm,
        Command::Digit(1),
        Command::Confirm,
        Command::Digit(1),
        Command::Confirm,
        Command::Confirm,
        Command::Confirm,
        Command::Digit(2),
        Command::MoveDown,
        Command::Digit(2),
        Command::Confirm,
    ];

    #[test]
    fn test_callsign_to_setup() {
        let now = Instant::now();
        let mut session = Session::new(Settings::default());
        assert!(session.accepts_text());

        session.handle(Command::Confirm, now);
        assert!(session.wizard().is_none());

        type_text(&mut session, "ace", now);
        session.handle(Command::Confirm, now);
        assert!(!session.accepts_text());
        assert_eq!(session.wizard().map(SetupWizard::user_name), Some("ACE"));
    }

    #[test]
    fn test_quit_from_any_screen() {
        let now = Instant::now();
        let mut session = Session::new(Settings::default());
        assert_eq!(session.handle(Command::Quit, now), Signal::Exit);

        let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
        assert_eq!(session.handle(Command::Quit, now), Signal::Exit);
        press(&mut session, &QUICK_SETUP, now);
        assert!(session.controller().is_some());
        assert_eq!(session.handle(Command::Quit, now), Signal::Exit);
    }

    #[test]
    fn test_cancel_returns_to_fresh_setup() {
        let now = Instant::now();
        let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
        press(&mut session, &QUICK_SETUP, now);
        assert!(session.controller().is_some());

        session.handle(Command::Cancel, now);
        let wizard = session.wizard().unwrap();
        assert_eq!(wizard.step(), SetupStep::PlayerCount);
        assert_eq!(wizard.user_name(), "ACE");
        assert!(wizard.players().is_empty());
    }

    #[test]
    fn test_auto_return_through_tick() {
        let now = Instant::now();
        let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
        press(&mut session, &QUICK_SETUP, now);

        // ACE shoots OPPONENT 1 with a live round; OPPONENT 1 had 1 HP
        press(
            &mut session,
            &[
                Command::Confirm,
                Command::Confirm,
                Command::MoveDown,
                Command::Confirm,
                Command::Confirm,
            ],
            now,
        );
        let snapshot = session.snapshot();
        let ScreenView::Match(view) = &snapshot.screen else {
            panic!("expected match screen");
        };
        assert!(view.over);
        assert!(view.returning);
        assert_eq!(
            snapshot.recommendation.map(|a| a.message),
            Some("GAME OVER - ACE WINS! Returning to setup...".to_string())
        );

        assert!(!session.tick(now + Duration::from_millis(100)));
        assert!(session.tick(now + Duration::from_secs(2)));
        assert!(session.wizard().is_some());
        assert!(!session.tick(now + Duration::from_secs(4)));
    }

    #[test]
    fn test_left_match_never_auto_returns() {
        let now = Instant::now();
        let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
        press(&mut session, &QUICK_SETUP, now);
        press(
            &mut session,
            &[
                Command::Confirm,
                Command::Confirm,
                Command::MoveDown,
                Command::Confirm,
                Command::Confirm,
            ],
            now,
        );
        session.handle(Command::Cancel, now);

        // Start configuring again; the old timer must not reset this wizard
        session.handle(Command::Digit(5), now);
        assert!(!session.tick(now + Duration::from_secs(3)));
        assert_eq!(session.wizard().map(|w| w.view().player_count), Some(5));
    }

    #[test]
    fn test_match_snapshot() {
        let now = Instant::now();
        let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
        press(&mut session, &QUICK_SETUP, now);
        press(&mut session, &[Command::Confirm], now);

        let snapshot = session.snapshot();
        let ScreenView::Match(view) = &snapshot.screen else {
            panic!("expected match screen");
        };
        assert_eq!(view.phase, TurnPhase::SelectActionKind);
        assert_eq!(view.actor.as_deref(), Some("ACE"));
        assert_eq!(view.options, vec!["Shoot".to_string(), "Use Item".to_string()]);
        assert_eq!(snapshot.players.len(), 2);
        let ammo = snapshot.ammo.unwrap();
        assert_eq!((ammo.live, ammo.blank, ammo.live_percent), (2, 2, 50));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["screen"]["screen"], "match");
        assert_eq!(json["screen"]["phase"], "select_action_kind");
    }

    #[test]
    fn test_with_callsign_rejects_blank() {
        assert!(Session::with_callsign("   ", Settings::default()).is_none());
    }
}
