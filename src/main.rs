//! Broom: tidy up local git branches.
//!
//! Entry point for the `broom` CLI: parses arguments, installs the signal
//! handler, dispatches to the command handlers, and maps errors to exit
//! codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod git_branch;
pub mod interact;

#[cfg(test)]
pub(crate) mod test_support;

use cli::Cli;
use error::BroomError;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Interruption is cancellation, not failure: the user gets a quiet,
    // successful exit instead of a stack of half-finished error output.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\nOperation cancelled");
        std::process::exit(exit_codes::SUCCESS);
    }) {
        eprintln!("Warning: could not install the signal handler: {}", e);
    }

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(BroomError::Cancelled) => {
            println!("{}", BroomError::Cancelled);
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
