//! Runs every generator in sequence.

use super::common::ProjectContext;
use super::primitives::{self, PrimitivesSummary};
use super::wiki::{self, WikiSummary};
use crate::formatters::format_output;
use anyhow::Result;
use neogen_core::GeneratorKind;
use neogen_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;

/// Combined summary of an `all` run.
#[derive(Debug, Clone, Serialize)]
pub struct AllSummary {
    /// Iterator classes
    pub iterators: PrimitivesSummary,
    /// Generator classes
    pub generators: PrimitivesSummary,
    /// Wiki stubs
    pub wiki: WikiSummary,
}

/// Runs iterators, generators, then wiki with configured defaults.
///
/// Returns the summary and the snippet blocks of both primitive runs.
///
/// # Errors
///
/// Returns the first error; earlier steps keep their written files.
pub fn generate(project: &ProjectContext, dry_run: bool) -> Result<(AllSummary, String)> {
    let mut snippets = String::new();
    let mut primitives_of = |kind: GeneratorKind| -> Result<PrimitivesSummary> {
        let run = primitives::generate(project, kind, None, None, dry_run)?;
        snippets.push_str(&run.snippet_block);
        Ok(run.summary)
    };

    let iterators = primitives_of(GeneratorKind::Iterator)?;
    let generators = primitives_of(GeneratorKind::Generator)?;
    let wiki = wiki::generate(project, None, None, dry_run)?;

    Ok((
        AllSummary {
            iterators,
            generators,
            wiki,
        },
        snippets,
    ))
}

/// Runs the `all` command.
///
/// # Errors
///
/// Returns an error if any step fails.
pub fn run(project: &ProjectContext, dry_run: bool, output_format: OutputFormat) -> Result<ExitCode> {
    let (summary, snippets) = generate(project, dry_run)?;

    print!("{snippets}");
    println!("{}", format_output(&summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}
