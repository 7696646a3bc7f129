//! End-to-end match flows driven through a session.
//!
//! Each test starts at callsign entry and feeds the same commands a host
//! would, checking roster, ammo, history and advice along the way.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use tactician::game::{ActionKind, Item, check_invariants};
use tactician::setup::SetupStep;
use tactician::snapshot::ScreenView;
use tactician::{Command, Session, Settings, Signal, ThreatLevel};

fn feed(session: &mut Session, commands: &[Command], now: Instant) {
    for &command in commands {
        assert_eq!(session.handle(command, now), Signal::Continue);
    }
}

fn enter_callsign(session: &mut Session, name: &str, now: Instant) {
    for c in name.chars() {
        session.handle(Command::TextChar(c), now);
    }
    session.handle(Command::Confirm, now);
}

/// Two players with health 3 each; ACE holds one Beer; 2 live and 2 blank.
fn start_match(now: Instant) -> Session {
    let mut session = Session::new(Settings::default());
    enter_callsign(&mut session, "ace", now);
    feed(
        &mut session,
        &[
            // Player count (default 2), then page through the names
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            // Health
            Command::Digit(3),
            Command::Confirm,
            Command::Digit(3),
            Command::Confirm,
            // ACE: one Beer (fifth in the catalog)
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
            Command::Digit(1),
            Command::Confirm,
            // OPPONENT 1: nothing
            Command::Confirm,
            // Ammo
            Command::Digit(2),
            Command::MoveDown,
            Command::Digit(2),
            Command::Confirm,
        ],
        now,
    );
    assert!(session.controller().is_some(), "setup should have completed");
    session
}

const SHOOT_OPPONENT_LIVE: [Command; 5] = [
    Command::Confirm,  // actor ACE
    Command::Confirm,  // Shoot
    Command::MoveDown, // OPPONENT 1
    Command::Confirm,
    Command::Confirm, // live
];

#[test]
fn test_live_shot_at_opponent() {
    let now = Instant::now();
    let mut session = start_match(now);
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);

    let state = session.controller().unwrap().state();
    assert_eq!(state.ammo.live(), 1);
    assert_eq!(state.ammo.blank(), 2);
    assert_eq!(state.roster.get(2).unwrap().health, 2);
    assert_eq!(state.roster.get(1).unwrap().health, 3);
    assert_eq!(state.log.len(), 1);
    assert_eq!(state.log.entries()[0].damage, Some(1));
    assert_eq!(state.log.entries()[0].target.as_deref(), Some("OPPONENT 1"));
    assert!(check_invariants(state).is_empty());
}

#[test]
fn test_item_use() {
    let now = Instant::now();
    let mut session = start_match(now);
    feed(
        &mut session,
        &[
            Command::Confirm,  // actor ACE
            Command::MoveDown, // Use Item
            Command::Confirm,
            Command::Confirm, // [1x] Beer
        ],
        now,
    );

    let state = session.controller().unwrap().state();
    let ace = state.roster.user().unwrap();
    assert_eq!(ace.item_quantity(Item::Beer), 0);
    assert!(!ace.items.contains_key(&Item::Beer));
    assert_eq!((state.ammo.live(), state.ammo.blank()), (2, 2));

    let entry = &state.log.entries()[0];
    assert_eq!(entry.kind, ActionKind::Item);
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["action"], "item");
    assert_eq!(json["item"], "Beer");
    assert!(json.get("outcome").is_none());
    assert!(json.get("damage").is_none());
}

#[test]
fn test_safe_zone_when_only_blanks_remain() {
    let now = Instant::now();
    let mut session = start_match(now);
    // Two live rounds into the opponent
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);

    let controller = session.controller().unwrap();
    assert_eq!(controller.state().ammo.live(), 0);
    assert_eq!(controller.state().ammo.blank(), 2);
    let advice = controller.recommendation();
    assert_eq!(advice.level, ThreatLevel::SafeZone);
    assert_eq!(
        advice.message,
        "ACE: SAFE ZONE - Only blanks remaining, proceed with confidence"
    );
}

#[test]
fn test_empty_magazine_returns_to_setup() {
    let now = Instant::now();
    let mut session = start_match(now);
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);
    // Only blanks remain, so the outcome step offers nothing else
    feed(
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
    let controller = session.controller().unwrap();
    assert_eq!(controller.state().roster.get(2).unwrap().health, 1);
    assert!(controller.auto_return().is_none());

    // Last blank: the magazine runs dry and the match ends
    feed(
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
    let controller = session.controller().unwrap();
    assert!(controller.is_over());
    assert!(controller.auto_return().is_some());
    assert_eq!(controller.recommendation().level, ThreatLevel::MissionComplete);

    session.tick(now + Duration::from_secs(2));
    let wizard = session.wizard().unwrap();
    assert_eq!(wizard.step(), SetupStep::PlayerCount);
    assert_eq!(wizard.user_name(), "ACE");
}

#[test]
fn test_last_survivor_named() {
    let now = Instant::now();
    let mut session = Session::with_callsign("ace", Settings::default()).unwrap();
    feed(
        &mut session,
        &[
            Command::Digit(3),
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            Command::Digit(1),
            Command::Confirm,
            Command::Digit(1),
            Command::Confirm,
            Command::Digit(2),
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            Command::Digit(4),
            Command::MoveDown,
            Command::Digit(1),
            Command::Confirm,
        ],
        now,
    );

    // OPPONENT 2 shoots ACE, then OPPONENT 1
    for target_downs in [0, 1] {
        feed(
            &mut session,
            &[Command::MoveDown, Command::MoveDown, Command::Confirm, Command::Confirm],
            now,
        );
        for _ in 0..target_downs {
            session.handle(Command::MoveDown, now);
        }
        feed(&mut session, &[Command::Confirm, Command::Confirm], now);
    }

    let snapshot = session.snapshot();
    let ScreenView::Match(view) = &snapshot.screen else {
        panic!("expected match screen");
    };
    assert!(view.over);
    assert!(view.returning);
    let advice = snapshot.recommendation.unwrap();
    assert_eq!(advice.level, ThreatLevel::GameOver);
    assert_eq!(advice.message, "GAME OVER - OPPONENT 2 WINS! Returning to setup...");
}

#[test]
fn test_cancel_mid_turn_returns_to_setup() {
    let now = Instant::now();
    let mut session = start_match(now);
    feed(&mut session, &[Command::Confirm, Command::Confirm, Command::MoveDown], now);
    let turn = session.controller().unwrap().turn();
    assert_eq!(turn.target(), None);
    assert_eq!(turn.cursor(), 1);

    session.handle(Command::Cancel, now);
    assert!(session.controller().is_none());
    let wizard = session.wizard().unwrap();
    assert_eq!(wizard.user_name(), "ACE");
    assert!(wizard.players().is_empty());
}

#[test]
fn test_quit_signal_from_match() {
    let now = Instant::now();
    let mut session = start_match(now);
    assert_eq!(session.handle(Command::Quit, now), Signal::Exit);
    // Quit is only a signal; the session is still usable
    assert!(session.controller().is_some());
}

#[test]
fn test_history_window_in_snapshot() {
    let now = Instant::now();
    let mut session = start_match(now);
    // A blank at ACE, the Beer, then two live rounds at the opponent
    feed(
        &mut session,
        &[
            Command::Confirm,
            Command::Confirm,
            Command::Confirm,
            Command::MoveDown,
            Command::Confirm,
        ],
        now,
    );
    feed(
        &mut session,
        &[Command::Confirm, Command::MoveDown, Command::Confirm, Command::Confirm],
        now,
    );
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);
    feed(&mut session, &SHOOT_OPPONENT_LIVE, now);

    let snapshot = session.snapshot();
    assert_eq!(session.controller().unwrap().state().log.len(), 4);
    assert_eq!(snapshot.recent_actions.len(), 3);
    assert_eq!(snapshot.recent_actions[0].to_string(), "ACE: item [Beer]");
    assert_eq!(
        snapshot.recent_actions[2].to_string(),
        "ACE: shoot → OPPONENT 1 (live) -1HP"
    );
}
