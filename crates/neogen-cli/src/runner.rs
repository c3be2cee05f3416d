//! Command execution and runtime logic.
//!
//! Contains logging initialization, command dispatch, and the mapping from
//! errors to process exit codes.

use anyhow::{Result, anyhow};
use neogen_core::GeneratorKind;
use neogen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Commands;
use crate::commands;
use crate::commands::common::ProjectContext;

/// Initializes logging infrastructure.
///
/// Logs go to stderr so stdout carries only snippets and summaries.
/// `verbose` forces the debug level; otherwise `RUST_LOG` applies, falling
/// back to info.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if the project cannot be loaded or the command fails.
pub fn execute_command(
    command: Commands,
    project: Option<std::path::PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    if let Commands::Completions { shell } = command {
        use crate::cli::Cli;
        use clap::CommandFactory;
        let mut cmd = Cli::command();
        return commands::completions::run(shell, &mut cmd);
    }

    let project = ProjectContext::load(project)?;

    match command {
        Commands::Iterators {
            snippet,
            output,
            dry_run,
        } => commands::primitives::run(
            &project,
            GeneratorKind::Iterator,
            Some(snippet.into()),
            output,
            dry_run,
            output_format,
        ),
        Commands::Generators { output, dry_run } => commands::primitives::run(
            &project,
            GeneratorKind::Generator,
            None,
            output,
            dry_run,
            output_format,
        ),
        Commands::Wiki {
            source,
            target,
            dry_run,
        } => commands::wiki::run(&project, source, target, dry_run, output_format),
        Commands::All { dry_run } => commands::all::run(&project, dry_run, output_format),
        Commands::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}

/// Maps an error to the exit code reported to the shell.
///
/// Library errors keep their category through any added context; anything
/// else is a general error.
///
/// # Examples
///
/// ```
/// use anyhow::Context;
/// use neogen_cli::runner::exit_code_for;
/// use neogen_core::{Error, cli::ExitCode};
///
/// let err = Err::<(), _>(Error::InvalidArgument("bad".into()))
///     .context("while parsing")
///     .unwrap_err();
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
/// ```
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<neogen_core::Error>()
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}
