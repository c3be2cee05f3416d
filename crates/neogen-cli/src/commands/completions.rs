//! Shell completion generation command.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use neogen_core::cli::ExitCode;
use std::io;
use tracing::debug;

/// Writes the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Errors
///
/// Currently infallible; returns `Result` like every other command.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use neogen_cli::commands::completions;
///
/// let mut cmd = Command::new("neogen");
/// completions::run(Shell::Bash, &mut cmd).unwrap();
/// ```
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    debug!("Generating {shell} completions");
    write_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
