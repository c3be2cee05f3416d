//! Wiki stub command.

use super::common::{ProjectContext, display_paths};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use neogen_codegen::{WikiGenerator, discover};
use neogen_core::cli::{ExitCode, OutputFormat};
use neogen_files::{ExportOptions, export_with_progress, planned_paths};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Summary of a wiki run.
#[derive(Debug, Clone, Serialize)]
pub struct WikiSummary {
    /// Source root that was scanned
    pub source_root: String,
    /// Directory receiving the stubs
    pub target_dir: String,
    /// Number of source files discovered
    pub entry_count: usize,
    /// Number of stub pages (fewer than entries when type names repeat)
    pub file_count: usize,
    /// Whether files were only planned
    pub dry_run: bool,
    /// Written (or planned) stub paths
    pub paths: Vec<String>,
}

/// Discovers source files and writes one stub page per type.
///
/// `source` and `target` override the configured directories.
///
/// # Errors
///
/// Returns an error if discovery fails, a stub fails to render, or a file
/// cannot be written.
pub fn generate(
    project: &ProjectContext,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    dry_run: bool,
) -> Result<WikiSummary> {
    let config = &project.config;
    let source_root = source.unwrap_or_else(|| config.source_root(project.root()));
    let target_dir = target.unwrap_or_else(|| config.wiki_target_dir(project.root()));

    let entries = discover(&source_root, &config.source_suffix)
        .with_context(|| format!("failed to scan {}", source_root.display()))?;
    let code = WikiGenerator::new()?.generate(&entries, &config.wiki_suffix)?;

    let paths = if dry_run {
        planned_paths(&code, &target_dir)?
    } else {
        export_with_progress(&code, &target_dir, &ExportOptions::default(), |_, path| {
            let type_name = path.file_stem().unwrap_or_default();
            info!("generating wiki {}", type_name.to_string_lossy());
        })
        .with_context(|| format!("failed to write wiki stubs to {}", target_dir.display()))?
    };

    Ok(WikiSummary {
        source_root: source_root.display().to_string(),
        target_dir: target_dir.display().to_string(),
        entry_count: entries.len(),
        file_count: paths.len(),
        dry_run,
        paths: display_paths(&paths),
    })
}

/// Runs the `wiki` command.
///
/// # Errors
///
/// Returns an error if generation fails or the summary cannot be formatted.
pub fn run(
    project: &ProjectContext,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let summary = generate(project, source, target, dry_run)?;
    println!("{}", format_output(&summary, output_format)?);
    Ok(ExitCode::SUCCESS)
}
