//! Writing generated files to disk.
//!
//! Every file is written through a handle scoped to a single write, so the
//! handle is closed on success and on every error path. Atomic mode writes
//! to a sibling temp file and renames it over the target.

use neogen_codegen::{GeneratedCode, GeneratedFile};
use neogen_core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;

/// Options for filesystem export operations.
///
/// # Examples
///
/// ```
/// use neogen_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_atomic_writes(false)
///     .with_create_base(false);
/// assert!(!options.atomic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write to a temp file then rename it over the target
    pub atomic: bool,
    /// Create the base directory (and its parents) when missing
    pub create_base: bool,
}

impl ExportOptions {
    /// Creates export options with defaults.
    ///
    /// Defaults:
    /// - atomic: true
    /// - `create_base`: true
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            create_base: true,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether a missing base directory is created.
    #[must_use]
    pub const fn with_create_base(mut self, create_base: bool) -> Self {
        self.create_base = create_base;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the paths `code` would be written to under `base`, in order.
///
/// # Errors
///
/// Returns a validation error if a file path is absolute or escapes `base`.
pub fn planned_paths(code: &GeneratedCode, base: &Path) -> Result<Vec<PathBuf>> {
    code.files().map(|file| disk_path(base, file)).collect()
}

/// Writes every file of `code` below `base`.
///
/// Existing files are truncated and overwritten, so exporting the same code
/// twice leaves byte-identical files. Returns the written paths in order.
///
/// # Errors
///
/// Returns error if:
/// - A file path is absolute or contains `..`
/// - `base` is missing and `create_base` is not set
/// - `base` exists but is not a directory
/// - Any directory creation or file write fails
pub fn export_to_filesystem(
    code: &GeneratedCode,
    base: &Path,
    options: &ExportOptions,
) -> Result<Vec<PathBuf>> {
    export_with_progress(code, base, options, |_, _| {})
}

/// Like [`export_to_filesystem`], calling `on_written(index, path)` after
/// each file is on disk.
///
/// `index` is the position of the file in `code`. The callback never runs
/// for a file whose write failed.
///
/// # Errors
///
/// Same as [`export_to_filesystem`].
///
/// # Examples
///
/// ```
/// use neogen_codegen::{GeneratedCode, GeneratedFile};
/// use neogen_files::{ExportOptions, export_with_progress};
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// let mut code = GeneratedCode::new();
/// code.add_file(GeneratedFile { path: "A.java".into(), content: "a".into() });
/// code.add_file(GeneratedFile { path: "B.java".into(), content: "b".into() });
///
/// let mut seen = Vec::new();
/// export_with_progress(&code, temp.path(), &ExportOptions::default(), |i, _| seen.push(i))
///     .unwrap();
/// assert_eq!(seen, [0, 1]);
/// ```
pub fn export_with_progress<F>(
    code: &GeneratedCode,
    base: &Path,
    options: &ExportOptions,
    mut on_written: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(usize, &Path),
{
    let targets = planned_paths(code, base)?;
    prepare_base(base, options)?;

    for (index, (file, target)) in code.files().zip(&targets).enumerate() {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        if options.atomic {
            write_file_atomic(target, file.content())?;
        } else {
            write_file(target, file.content())?;
        }

        tracing::debug!("Wrote {}", target.display());
        on_written(index, target);
    }

    tracing::info!("Exported {} files to {}", targets.len(), base.display());

    Ok(targets)
}

fn prepare_base(base: &Path, options: &ExportOptions) -> Result<()> {
    if base.is_dir() {
        return Ok(());
    }

    if base.exists() {
        return Err(Error::io(
            base,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    if !options.create_base {
        return Err(Error::io(
            base,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "output directory does not exist",
            ),
        ));
    }

    tracing::debug!("Creating output directory {}", base.display());
    fs::create_dir_all(base).map_err(|e| Error::io(base, e))
}

fn disk_path(base: &Path, file: &GeneratedFile) -> Result<PathBuf> {
    let relative = Path::new(file.path());
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if file.path().is_empty() || escapes {
        return Err(Error::ValidationError {
            field: "path".to_string(),
            reason: format!("'{}' must be relative to the output directory", file.path()),
        });
    }

    Ok(base.join(relative))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes()).map_err(|e| Error::io(path, e))
}

fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    // Dropping the temp file on any early return deletes it.
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
