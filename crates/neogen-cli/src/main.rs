//! neogen - boilerplate generator for the neoitertools Java library.
//!
//! # Examples
//!
//! ```bash
//! # Write iterator classes and print the Iterables snippets
//! neogen iterators
//!
//! # Preview generator classes without writing
//! neogen generators --dry-run --format json
//!
//! # Regenerate everything for a checkout elsewhere
//! neogen --project ~/src/neoitertools all
//! ```

use anyhow::Result;
use clap::Parser;
use neogen_cli::cli::Cli;
use neogen_cli::runner::{execute_command, exit_code_for, init_logging};
use neogen_core::cli::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = match cli
        .format
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::from)
        .and_then(|format| execute_command(cli.command, cli.project, format))
    {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}
