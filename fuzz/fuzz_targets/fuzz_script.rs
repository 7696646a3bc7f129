#![no_main]

//! Script parser fuzzer: arbitrary text must parse or fail cleanly, and a
//! parsed script must run against a session without panicking.

use std::time::Instant;

use libfuzzer_sys::fuzz_target;
use tactician::script::{Script, Step};
use tactician::{Session, Settings};

fuzz_target!(|source: &str| {
    let Ok(script) = Script::parse(source) else {
        return;
    };

    let mut now = Instant::now();
    let mut session = Session::new(Settings::default());
    for step in script.steps().iter().take(2000) {
        match *step {
            Step::Command(command) => {
                session.handle(command, now);
            }
            Step::Wait(duration) => {
                now = now.checked_add(duration).unwrap_or(now);
                session.tick(now);
            }
        }
    }
});
