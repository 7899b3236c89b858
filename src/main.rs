//! # Piecemeal CLI
//!
//! This is the binary entry point for the `piecemeal` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting a failed run as one message on stderr and an exit status from
//!   [`piecemeal::exit_codes`].
//!
//! The core logic lives in the `lib.rs` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use piecemeal::error::Error;
use piecemeal::exit_codes;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<Error>()
                .map_or(exit_codes::FATAL_ERROR, Error::exit_code);
            ExitCode::from(code)
        }
    }
}
