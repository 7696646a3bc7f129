//! Tactician CLI - terminal front end for the tactical assistant.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Tactician - track a shotgun roulette match and get advice on the odds
#[derive(Parser, Debug)]
#[command(name = "tactician")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive assistant (default)
    Play(cli::PlayArgs),

    /// Feed a command script to a headless session
    Script {
        /// Script file, one or more commands per line
        #[arg(required = true)]
        file: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the final state
        #[arg(short, long)]
        quiet: bool,

        /// Skip callsign entry and start at setup
        #[arg(short, long)]
        callsign: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args
        .command
        .unwrap_or_else(|| Commands::Play(cli::PlayArgs::default()))
    {
        Commands::Play(play) => cli::play::execute(&play),

        Commands::Script {
            file,
            format,
            quiet,
            callsign,
        } => cli::script::execute(&file, format, quiet, callsign.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
