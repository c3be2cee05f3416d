//! Iterator and generator class commands.
//!
//! Both commands render one class per catalog pair into the configured
//! package directory and log `generating <Boxed>` as each class is written.
//! They then print the snippet block on stdout followed by a summary of the
//! written files.

use super::common::{ProjectContext, display_paths};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use neogen_codegen::PrimitiveGenerator;
use neogen_core::cli::{ExitCode, OutputFormat};
use neogen_core::{Catalog, GeneratorKind, SnippetKind};
use neogen_files::{ExportOptions, export_with_progress, planned_paths};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Summary of one iterator or generator run.
#[derive(Debug, Clone, Serialize)]
pub struct PrimitivesSummary {
    /// Kind of classes generated
    pub kind: GeneratorKind,
    /// Snippet printed for each pair
    pub snippet: SnippetKind,
    /// Package the classes are declared in
    pub package: String,
    /// Directory the classes are written to
    pub output_dir: String,
    /// Number of class files
    pub file_count: usize,
    /// Whether files were only planned
    pub dry_run: bool,
    /// Written (or planned) file paths, in catalog order
    pub paths: Vec<String>,
}

/// Summary plus the snippet text to print.
#[derive(Debug, Clone)]
pub struct PrimitivesRun {
    /// What was generated
    pub summary: PrimitivesSummary,
    /// Snippets joined in catalog order, each followed by a newline
    pub snippet_block: String,
}

/// Generates the classes of `kind` and writes them unless `dry_run` is set.
///
/// `output` overrides the configured package directory.
///
/// # Errors
///
/// Returns an error if the base package is invalid, a template fails to
/// render, or a file cannot be written.
pub fn generate(
    project: &ProjectContext,
    kind: GeneratorKind,
    snippet: Option<SnippetKind>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<PrimitivesRun> {
    let package = project.config.package().context("invalid base_package")?;
    let output_dir = match output {
        Some(dir) => dir,
        None => project.config.output_dir(project.root(), kind)?,
    };

    let catalog = Catalog::builtin();
    let emission = PrimitiveGenerator::new(package)?
        .generate(&catalog, kind, snippet)
        .with_context(|| format!("failed to generate {kind} classes"))?;

    let paths = if dry_run {
        planned_paths(&emission.code, &output_dir)?
    } else {
        let pairs: Vec<_> = catalog.iter().collect();
        export_with_progress(
            &emission.code,
            &output_dir,
            &ExportOptions::default(),
            |index, _| {
                if let Some(pair) = pairs.get(index) {
                    info!("generating {}", pair.boxed());
                }
            },
        )
        .with_context(|| format!("failed to write {kind} classes to {}", output_dir.display()))?
    };

    Ok(PrimitivesRun {
        snippet_block: emission.snippet_block(),
        summary: PrimitivesSummary {
            kind,
            snippet: emission.snippet,
            package: emission.package,
            output_dir: output_dir.display().to_string(),
            file_count: paths.len(),
            dry_run,
            paths: display_paths(&paths),
        },
    })
}

/// Runs the `iterators` or `generators` command.
///
/// # Errors
///
/// Returns an error if generation fails or the summary cannot be formatted.
///
/// # Examples
///
/// ```no_run
/// use neogen_cli::commands::{common::ProjectContext, primitives};
/// use neogen_core::GeneratorKind;
/// use neogen_core::cli::OutputFormat;
///
/// let project = ProjectContext::load(None)?;
/// primitives::run(&project, GeneratorKind::Iterator, None, None, true, OutputFormat::Text)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run(
    project: &ProjectContext,
    kind: GeneratorKind,
    snippet: Option<SnippetKind>,
    output: Option<PathBuf>,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let run = generate(project, kind, snippet, output, dry_run)?;

    print!("{}", run.snippet_block);
    println!("{}", format_output(&run.summary, output_format)?);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neogen_core::ProjectConfig;
    use std::fs;
    use tempfile::TempDir;

    fn project(root: &std::path::Path) -> ProjectContext {
        ProjectContext::new(root, ProjectConfig::default())
    }

    #[test]
    fn test_generate_iterators_writes_package_dir() {
        let temp = TempDir::new().unwrap();
        let run = generate(&project(temp.path()), GeneratorKind::Iterator, None, None, false).unwrap();

        let dir = temp
            .path()
            .join("src/main/java/net/ericaro/neoitertools/primitives");
        assert_eq!(run.summary.file_count, 8);
        assert_eq!(run.summary.output_dir, dir.display().to_string());
        assert!(dir.join("ByteIterator.java").is_file());
        assert!(dir.join("BooleanIterator.java").is_file());
    }

    #[test]
    fn test_generate_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let run = generate(&project(temp.path()), GeneratorKind::Generator, None, None, true).unwrap();

        assert!(run.summary.dry_run);
        assert_eq!(run.summary.paths.len(), 8);
        assert!(run.summary.paths[0].ends_with("ByteGenerator.java"));
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_generate_output_override() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("custom");
        generate(
            &project(temp.path()),
            GeneratorKind::Iterator,
            Some(SnippetKind::IteratorFactory),
            Some(out.clone()),
            false,
        )
        .unwrap();

        assert!(out.join("LongIterator.java").is_file());
        assert!(!temp.path().join("src").exists());
    }

    #[test]
    fn test_snippet_block_in_catalog_order() {
        let temp = TempDir::new().unwrap();
        let run = generate(&project(temp.path()), GeneratorKind::Generator, None, None, true).unwrap();

        let byte = run.snippet_block.find("new ByteGenerator(array)").unwrap();
        let boolean = run.snippet_block.find("new BooleanGenerator(array)").unwrap();
        assert!(byte < boolean);
        assert_eq!(run.summary.snippet, SnippetKind::GeneratorFactory);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let first = generate(&project(temp.path()), GeneratorKind::Iterator, None, None, false).unwrap();
        let before = fs::read(&first.summary.paths[3]).unwrap();

        generate(&project(temp.path()), GeneratorKind::Iterator, None, None, false).unwrap();
        assert_eq!(fs::read(&first.summary.paths[3]).unwrap(), before);
    }
}
