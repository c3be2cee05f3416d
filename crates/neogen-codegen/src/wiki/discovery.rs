//! Source tree discovery.
//!
//! Walks a source root and derives `(package, type name)` pairs from the
//! paths of source files. Directory entries are visited sorted by file
//! name, so discovery order is the same on every filesystem.
//!
//! Any traversal failure is fatal: discovery stops at the first error.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::wiki::discover;
//! use std::fs;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let root = temp.path();
//! fs::create_dir_all(root.join("a/b")).unwrap();
//! fs::write(root.join("a/b/Foo.java"), "class Foo {}").unwrap();
//!
//! let entries = discover(root, "java").unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].package, "a.b");
//! assert_eq!(entries[0].type_name, "Foo");
//! ```

use crate::wiki::types::DiscoveredEntry;
use neogen_core::{Error, Result};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Lazily discovers source files ending with `.suffix` under `source_root`.
///
/// Yields an error item, after which the caller should stop, when the root
/// is missing, is not a directory, or cannot be traversed.
pub fn discover_iter<'a>(
    source_root: &'a Path,
    suffix: &str,
) -> impl Iterator<Item = Result<DiscoveredEntry>> + use<'a> {
    let extension = format!(".{suffix}");

    WalkDir::new(source_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Err(e) => Some(Err(Error::DiscoveryError {
                path: e.path().unwrap_or(source_root).to_path_buf(),
                message: e.to_string(),
            })),
            Ok(entry) if entry.depth() == 0 && !entry.file_type().is_dir() => {
                Some(Err(Error::DiscoveryError {
                    path: source_root.to_path_buf(),
                    message: "source root is not a directory".to_string(),
                }))
            }
            Ok(entry) => to_entry(source_root, &entry, &extension).map(Ok),
        })
}

/// Discovers all source files ending with `.suffix` under `source_root`.
///
/// # Errors
///
/// Returns a discovery error for the first traversal failure, including a
/// missing or non-directory root.
pub fn discover(source_root: &Path, suffix: &str) -> Result<Vec<DiscoveredEntry>> {
    let entries = discover_iter(source_root, suffix).collect::<Result<Vec<_>>>()?;

    tracing::info!(
        "Discovered {} source files under {}",
        entries.len(),
        source_root.display()
    );

    Ok(entries)
}

fn to_entry(source_root: &Path, entry: &DirEntry, extension: &str) -> Option<DiscoveredEntry> {
    if !entry.file_type().is_file() {
        return None;
    }

    let file_name = entry.file_name().to_string_lossy();
    let type_name = file_name.strip_suffix(extension)?;
    if type_name.is_empty() {
        return None;
    }

    let relative_dir = entry.path().parent()?.strip_prefix(source_root).ok()?;
    let package = relative_dir
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(".");

    tracing::debug!("Found {} in package '{}'", type_name, package);

    Some(DiscoveredEntry {
        package,
        type_name: type_name.to_string(),
        source_path: entry.path().to_path_buf(),
    })
}
