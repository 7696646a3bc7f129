//! Play command implementation - the interactive assistant.

use super::{CliError, PlayArgs, init_logging, keys, ui};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};
use tactician::{Session, Signal};

/// How long to wait for input before checking timers again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the callsign is invalid, the log file cannot be
/// created, or the terminal fails.
pub(crate) fn execute(args: &PlayArgs) -> Result<(), CliError> {
    // stderr belongs to the TUI; only log when there is somewhere to put it
    if let Some(path) = &args.log_file {
        init_logging("info", Some(path))?;
    }

    let settings = args.settings();
    let session = match &args.callsign {
        Some(callsign) => Session::with_callsign(callsign, settings)
            .ok_or_else(|| CliError::new(format!("Invalid callsign {callsign:?}")))?,
        None => Session::new(settings),
    };

    run_tui(session)
}

fn run_tui(mut session: Session) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = event_loop(&mut terminal, &mut session);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
) -> Result<(), CliError> {
    loop {
        let snapshot = session.snapshot();
        terminal
            .draw(|f| ui::draw(f, &snapshot))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && let Some(command) = keys::decode(key, session.accepts_text())
            && session.handle(command, Instant::now()) == Signal::Exit
        {
            break;
        }

        session.tick(Instant::now());
    }

    Ok(())
}
