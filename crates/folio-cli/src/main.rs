//! folio CLI - paginate content stubs into listing pages
//!
//! This is the main entry point for the `folio` command-line interface.
//! Each subcommand lives in its own module under `commands`.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod error;
mod input;
mod logging;
mod output;

use cli::{Cli, Commands};
use error::{CliError, CliResult};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::initialize_logging(&cli) {
        eprintln!("Error: {err:#}");
        return error::ErrorCategory::Internal.as_exit_code();
    }

    match execute_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn execute_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Paginate(args) => commands::paginate(&args),
        Commands::Count { length, per_page } => commands::count(length, per_page),
        Commands::Links { index, length } => commands::links(index, length),
        Commands::Config { settings } => commands::show_config(&settings),
    }
}

fn report(err: &CliError) -> ExitCode {
    tracing::debug!(category = %err.category, "Command failed");
    eprintln!("Error: {err}");
    err.category.as_exit_code()
}
