//! Types for generated output.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "ByteIterator.java".to_string(),
//!     content: "public class ByteIterator {}".to_string(),
//! });
//!
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Result of code generation containing all generated files.
///
/// Files keep the order in which they were generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// List of generated files with paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Adds a file, replacing the content of an existing file with the same path.
    ///
    /// Returns the replaced file, if any. A replaced file keeps its position.
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.upsert_file(GeneratedFile { path: "Foo.wiki".into(), content: "a".into() });
    /// let old = code.upsert_file(GeneratedFile { path: "Foo.wiki".into(), content: "b".into() });
    ///
    /// assert_eq!(old.unwrap().content, "a");
    /// assert_eq!(code.file_count(), 1);
    /// assert_eq!(code.files[0].content, "b");
    /// ```
    pub fn upsert_file(&mut self, file: GeneratedFile) -> Option<GeneratedFile> {
        match self.files.iter_mut().find(|f| f.path == file.path) {
            Some(existing) => Some(std::mem::replace(existing, file)),
            None => {
                self.files.push(file);
                None
            }
        }
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Returns the relative paths of all files, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(GeneratedFile::path).collect()
    }
}

/// A single generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
