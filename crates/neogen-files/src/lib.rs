//! Filesystem export for generated code.
//!
//! Writes the files of a [`GeneratedCode`](neogen_codegen::GeneratedCode)
//! below a base directory, creating intermediate directories and
//! truncating existing files. Atomic writes go through a
//! [`tempfile::NamedTempFile`] in the target directory.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::{GeneratedCode, GeneratedFile};
//! use neogen_files::{ExportOptions, export_to_filesystem};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! # let base = temp.path().join("primitives");
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "IntegerIterator.java".to_string(),
//!     content: "public class IntegerIterator {}\n".to_string(),
//! });
//!
//! let written = export_to_filesystem(&code, &base, &ExportOptions::default()).unwrap();
//! assert_eq!(written, [base.join("IntegerIterator.java")]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod filesystem;

pub use filesystem::{ExportOptions, export_to_filesystem, export_with_progress, planned_paths};
