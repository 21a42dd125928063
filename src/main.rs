//! Command-line driver: fires a hero's shots and prints the damage report.

use clap::{value_parser, Arg, ArgAction, Command};
use hero_state::driver::{self, DEFAULT_SHOTS};
use hero_state::{HeroBuilder, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("hero-state")
        .about("Drive a hero through a sequence of shots")
        .arg(
            Arg::new("shots")
                .short('n')
                .long("shots")
                .value_parser(value_parser!(u32))
                .default_value("9")
                .help("Number of shots to fire"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .action(ArgAction::SetTrue)
                .help("Print the state transition history as JSON afterwards"),
        )
}

fn play(shots: u32, show_history: bool) -> Result<()> {
    let mut hero = HeroBuilder::new().record_history(show_history).build()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    driver::stream(&mut hero, shots, &mut out)?;

    if show_history {
        let json = serde_json::to_string_pretty(hero.history())?;
        writeln!(out, "{json}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = cli().get_matches();
    let shots = matches
        .get_one::<u32>("shots")
        .copied()
        .unwrap_or(DEFAULT_SHOTS);

    match play(shots, matches.get_flag("history")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "hero run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
