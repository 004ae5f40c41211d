//! LLAP package builder CLI
//!
//! Exit codes: 0 on success, 1 when the run fails, 2 for usage errors
//! (reported by clap), 3 when the builder panics.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use std::panic;

use cli::Cli;
use error::Result;

const EXIT_FAILURE: i32 = 1;
const EXIT_PANIC: i32 = 3;

fn main() {
    let code = match panic::catch_unwind(run) {
        Ok(Ok(())) => 0,
        Ok(Err(e)) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            EXIT_FAILURE
        }
        Err(_) => EXIT_PANIC,
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(directory = %cli.directory.display(), "starting package build");

    commands::run_package(&cli)
}
