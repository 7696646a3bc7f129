#![no_main]

//! Session fuzzer.
//!
//! Feeds arbitrary command streams, with arbitrary gaps of time between
//! them, into a session and checks the match invariants after every step.
//! The streams cover every screen: callsign entry, setup and matches,
//! including leaving and re-entering setup.

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tactician::game::check_invariants;
use tactician::{Command, Session, Settings};

/// A fuzzer-generated input event.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzCommand {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Digit(u8),
    Increment,
    Decrement,
    Text(char),
    Backspace,
    Quit,
    /// Let time pass, in milliseconds.
    Wait(u16),
}

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Skip callsign entry with this name.
    callsign: Option<String>,
    /// Milliseconds before an ended match returns to setup.
    return_delay_ms: u16,
    events: Vec<FuzzCommand>,
}

fuzz_target!(|input: SessionInput| {
    let settings = Settings {
        return_delay: Duration::from_millis(u64::from(input.return_delay_ms)),
        ..Settings::default()
    };
    let mut session = input
        .callsign
        .as_deref()
        .and_then(|name| Session::with_callsign(name, settings))
        .unwrap_or_else(|| Session::new(settings));

    let mut now = Instant::now();
    for event in input.events.into_iter().take(2000) {
        let command = match event {
            FuzzCommand::Up => Command::MoveUp,
            FuzzCommand::Down => Command::MoveDown,
            FuzzCommand::Left => Command::MoveLeft,
            FuzzCommand::Right => Command::MoveRight,
            FuzzCommand::Confirm => Command::Confirm,
            FuzzCommand::Cancel => Command::Cancel,
            FuzzCommand::Digit(n) => Command::Digit(n % 10),
            FuzzCommand::Increment => Command::Increment,
            FuzzCommand::Decrement => Command::Decrement,
            FuzzCommand::Text(c) => Command::TextChar(c),
            FuzzCommand::Backspace => Command::TextBackspace,
            FuzzCommand::Quit => Command::Quit,
            FuzzCommand::Wait(ms) => {
                now += Duration::from_millis(u64::from(ms));
                session.tick(now);
                continue;
            }
        };
        session.handle(command, now);

        if let Some(controller) = session.controller() {
            let violations = check_invariants(controller.state());
            assert!(violations.is_empty(), "invariant violations: {violations:?}");
        }
        // Snapshots must always be buildable and serializable
        let snapshot = session.snapshot();
        let _ = tactician::render::render_text(&snapshot);
    }
});
