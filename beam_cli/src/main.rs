//! # beamcalc
//!
//! Terminal front end for beam_core: prompts for a beam and load, prints the
//! peak deflection and bending moment, and saves the deflection curve as a
//! PNG image. `beamcalc solve ...` runs a single calculation from arguments.

mod cli;
mod logger;
mod plot;
mod prompt;
mod report;
mod session;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use beam_core::{CalcError, CalcResult};

use cli::{Cli, Command};
use prompt::Prompter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = cli.run_config();
    debug!(?config, "starting");

    let outcome = match cli.command.clone().unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            session::run_interactive(&mut prompter, &config)
        }
        Command::Solve(args) => session::run_calculation(&args.to_input(), &config, &mut io::stdout()).map(|_| ()),
    };

    if let Err(e) = &outcome {
        report_error(e, cli.verbose);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 when the session ended normally, including after an invalid menu
/// choice; 1 for every other error.
fn exit_status(outcome: &CalcResult<()>) -> u8 {
    match outcome {
        Ok(()) | Err(CalcError::InvalidSelection { .. }) => 0,
        Err(_) => 1,
    }
}

fn report_error(e: &CalcError, verbose: bool) {
    // Already reported as "Invalid choice. Exiting."
    if matches!(e, CalcError::InvalidSelection { .. }) {
        return;
    }
    eprintln!("Error: {}", e);
    if verbose {
        if let Ok(json) = serde_json::to_string_pretty(e) {
            eprintln!("{}", json);
        }
    }
}
