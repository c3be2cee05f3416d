//! Types for wiki stub generation.

use serde::Serialize;
use std::path::PathBuf;

/// A source file found under the scanned source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveredEntry {
    /// Dotted package derived from the directory path (empty at the root)
    pub package: String,
    /// File name without its source suffix
    pub type_name: String,
    /// Full path of the source file
    pub source_path: PathBuf,
}

impl DiscoveredEntry {
    /// Returns the fully qualified name (`a.b.Foo`, or `Foo` at the root).
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_codegen::DiscoveredEntry;
    /// use std::path::PathBuf;
    ///
    /// let entry = DiscoveredEntry {
    ///     package: "a.b".to_string(),
    ///     type_name: "Foo".to_string(),
    ///     source_path: PathBuf::from("a/b/Foo.java"),
    /// };
    /// assert_eq!(entry.qualified_name(), "a.b.Foo");
    /// ```
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}.{}", self.package, self.type_name)
        }
    }
}

/// Context for rendering a wiki stub.
#[derive(Debug, Clone, Serialize)]
pub struct StubContext<'a> {
    /// Type name, rendered by `{{type}}`
    #[serde(rename = "type")]
    pub type_name: &'a str,
    /// Dotted package, rendered by `{{package}}`
    pub package: &'a str,
}

impl<'a> From<&'a DiscoveredEntry> for StubContext<'a> {
    fn from(entry: &'a DiscoveredEntry) -> Self {
        Self {
            type_name: &entry.type_name,
            package: &entry.package,
        }
    }
}
