//! Script command implementation - headless runs from a command file.
//!
//! Time is virtual: it starts at the moment the run begins and only moves
//! on `wait` steps, so scripted auto-returns are deterministic.

use super::{CliError, OutputFormat, init_logging};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tactician::render::render_text;
use tactician::script::{Script, Step};
use tactician::{Session, Settings, Signal, Snapshot};

/// One JSON output line.
#[derive(Debug, Serialize)]
struct JsonFrame<'a> {
    /// 1-based step number; absent for the final frame of a quiet run.
    #[serde(skip_serializing_if = "Option::is_none")]
    step: Option<usize>,
    /// The step that produced this frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    /// Session state after the step.
    snapshot: &'a Snapshot,
}

/// Execute the script command.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, the callsign
/// is invalid, or output fails to serialize.
pub(crate) fn execute(
    file: &Path,
    format: OutputFormat,
    quiet: bool,
    callsign: Option<&str>,
) -> Result<(), CliError> {
    init_logging("warn", None)?;

    let script = Script::load(file)
        .map_err(|e| CliError::new(format!("{}: {e}", file.display())))?;
    let settings = Settings::default();
    let mut session = match callsign {
        Some(name) => Session::with_callsign(name, settings)
            .ok_or_else(|| CliError::new(format!("Invalid callsign {name:?}")))?,
        None => Session::new(settings),
    };
    log::info!("running {} steps from {}", script.len(), file.display());

    let mut now = Instant::now();
    for (index, step) in script.steps().iter().enumerate() {
        let input = match *step {
            Step::Command(command) => {
                if session.handle(command, now) == Signal::Exit {
                    log::info!("script quit at step {}", index + 1);
                    break;
                }
                command.to_string()
            }
            Step::Wait(duration) => {
                now = now.checked_add(duration).ok_or_else(|| {
                    CliError::new(format!("step {}: wait exceeds the clock range", index + 1))
                })?;
                if session.tick(now) {
                    log::debug!("auto-return fired at step {}", index + 1);
                }
                format!("wait {}", duration.as_millis())
            }
        };
        if !quiet {
            emit(format, Some(index + 1), Some(input), &session.snapshot())?;
        }
    }

    if quiet {
        emit(format, None, None, &session.snapshot())?;
    }
    Ok(())
}

fn emit(
    format: OutputFormat,
    step: Option<usize>,
    input: Option<String>,
    snapshot: &Snapshot,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            if let (Some(step), Some(input)) = (step, &input) {
                println!("--- step {step}: {input} ---");
            }
            print!("{}", render_text(snapshot));
            println!();
        }
        OutputFormat::Json => {
            let frame = JsonFrame {
                step,
                input,
                snapshot,
            };
            println!("{}", serde_json::to_string(&frame)?);
        }
    }
    Ok(())
}
