//! Strong domain types for neogen.
//!
//! The catalog of primitive types is the single driver of generation: every
//! output file and every snippet is produced from one [`TypePair`]. The
//! remaining types select *which* templates a run uses and *where* the
//! results land.
//!
//! # Examples
//!
//! ```
//! use neogen_core::{Catalog, GeneratorKind};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 8);
//!
//! let int = catalog.find("int").unwrap();
//! assert_eq!(GeneratorKind::Iterator.file_name(int), "IntegerIterator.java");
//! ```

use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Extension of every generated source file.
const JAVA_EXTENSION: &str = "java";

/// Built-in (primitive, boxed) pairs, in generation order.
///
/// Supporting a new primitive only requires appending an entry here.
const BUILTIN_TYPES: [(&str, &str); 8] = [
    ("byte", "Byte"),
    ("char", "Character"),
    ("short", "Short"),
    ("int", "Integer"),
    ("long", "Long"),
    ("float", "Float"),
    ("double", "Double"),
    ("boolean", "Boolean"),
];

/// A primitive type name paired with its boxed wrapper name.
///
/// Serializes to the template placeholders `type` and `Type`, so a pair is
/// directly usable as a rendering context.
///
/// # Examples
///
/// ```
/// use neogen_core::TypePair;
///
/// let pair = TypePair::new("int", "Integer");
/// assert_eq!(pair.primitive(), "int");
/// assert_eq!(pair.boxed(), "Integer");
///
/// let ctx = serde_json::to_value(&pair).unwrap();
/// assert_eq!(ctx["type"], "int");
/// assert_eq!(ctx["Type"], "Integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypePair {
    #[serde(rename = "type")]
    primitive: String,
    #[serde(rename = "Type")]
    boxed: String,
}

impl TypePair {
    /// Creates a new type pair.
    #[must_use]
    pub fn new(primitive: impl Into<String>, boxed: impl Into<String>) -> Self {
        Self {
            primitive: primitive.into(),
            boxed: boxed.into(),
        }
    }

    /// Returns the primitive name (`int`).
    #[inline]
    #[must_use]
    pub fn primitive(&self) -> &str {
        &self.primitive
    }

    /// Returns the boxed wrapper name (`Integer`).
    #[inline]
    #[must_use]
    pub fn boxed(&self) -> &str {
        &self.boxed
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primitive, self.boxed)
    }
}

/// Ordered, read-only sequence of [`TypePair`]s.
///
/// Boxed names are unique within a catalog, so the mapping from pair to
/// output file name is a bijection.
///
/// # Examples
///
/// ```
/// use neogen_core::{Catalog, TypePair};
///
/// let catalog = Catalog::new(vec![
///     TypePair::new("int", "Integer"),
///     TypePair::new("long", "Long"),
/// ]).unwrap();
///
/// let boxed: Vec<_> = catalog.iter().map(TypePair::boxed).collect();
/// assert_eq!(boxed, ["Integer", "Long"]);
///
/// // Duplicate boxed names would collide on disk
/// assert!(Catalog::new(vec![
///     TypePair::new("int", "Integer"),
///     TypePair::new("integer", "Integer"),
/// ]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pairs: Vec<TypePair>,
}

impl Catalog {
    /// Creates a catalog from explicit pairs.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a name is empty or if two pairs share
    /// the same boxed name.
    pub fn new(pairs: Vec<TypePair>) -> Result<Self> {
        let mut seen = HashSet::new();
        for pair in &pairs {
            if pair.primitive.is_empty() || pair.boxed.is_empty() {
                return Err(Error::ValidationError {
                    field: "catalog".to_string(),
                    reason: format!("type pair '{pair}' has an empty name"),
                });
            }
            if !seen.insert(pair.boxed.as_str()) {
                return Err(Error::ValidationError {
                    field: "catalog".to_string(),
                    reason: format!("duplicate boxed name '{}'", pair.boxed),
                });
            }
        }
        Ok(Self { pairs })
    }

    /// Returns the built-in catalog of the eight Java primitive types.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pairs: BUILTIN_TYPES
                .iter()
                .map(|(primitive, boxed)| TypePair::new(*primitive, *boxed))
                .collect(),
        }
    }

    /// Iterates over the pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TypePair> {
        self.pairs.iter()
    }

    /// Returns the number of pairs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the catalog has no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Looks up a pair by primitive name.
    #[must_use]
    pub fn find(&self, primitive: &str) -> Option<&TypePair> {
        self.pairs.iter().find(|p| p.primitive == primitive)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TypePair;
    type IntoIter = std::slice::Iter<'a, TypePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// The family of source files a run generates.
///
/// Each kind owns a file template, a sub-package below the base package,
/// a class-name suffix, and a default inline snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// `java.util.Iterator` implementations over primitive arrays.
    Iterator,
    /// `Generator` implementations over primitive arrays.
    Generator,
}

impl GeneratorKind {
    /// All kinds, in the order `all` runs them.
    pub const ALL: [Self; 2] = [Self::Iterator, Self::Generator];

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Iterator => "iterator",
            Self::Generator => "generator",
        }
    }

    /// Name of the file template registered in the template engine.
    #[must_use]
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Iterator => "primitives/iterator",
            Self::Generator => "primitives/generator",
        }
    }

    /// Sub-package, relative to the base package, holding the generated classes.
    #[must_use]
    pub const fn sub_package(&self) -> &'static str {
        match self {
            Self::Iterator => "primitives",
            Self::Generator => "generators.primitives",
        }
    }

    /// Class-name suffix appended to the boxed name.
    #[must_use]
    pub const fn class_suffix(&self) -> &'static str {
        match self {
            Self::Iterator => "Iterator",
            Self::Generator => "Generator",
        }
    }

    /// Snippet emitted alongside the files when none is requested explicitly.
    #[must_use]
    pub const fn default_snippet(&self) -> SnippetKind {
        match self {
            Self::Iterator => SnippetKind::Iterable,
            Self::Generator => SnippetKind::GeneratorFactory,
        }
    }

    /// Returns the class name generated for `pair` (`IntegerIterator`).
    #[must_use]
    pub fn class_name(&self, pair: &TypePair) -> String {
        format!("{}{}", pair.boxed(), self.class_suffix())
    }

    /// Returns the file name generated for `pair` (`IntegerIterator.java`).
    #[must_use]
    pub fn file_name(&self, pair: &TypePair) -> String {
        format!("{}.{JAVA_EXTENSION}", self.class_name(pair))
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline snippet printed for manual copy-paste into the aggregator classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnippetKind {
    /// `Iterables.iter(type[])` returning an anonymous `Iterable`.
    Iterable,
    /// `Iterators.iter(type[])` returning the generated iterator.
    IteratorFactory,
    /// `Generators.iter(type[])` returning the generated generator.
    GeneratorFactory,
}

impl SnippetKind {
    /// Returns the kebab-case name of the snippet.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Iterable => "iterable",
            Self::IteratorFactory => "iterator-factory",
            Self::GeneratorFactory => "generator-factory",
        }
    }

    /// Name of the snippet template registered in the template engine.
    #[must_use]
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::Iterable => "snippets/iterable",
            Self::IteratorFactory => "snippets/iterator-factory",
            Self::GeneratorFactory => "snippets/generator-factory",
        }
    }
}

impl fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "iterable" => Ok(Self::Iterable),
            "iterator-factory" => Ok(Self::IteratorFactory),
            "generator-factory" => Ok(Self::GeneratorFactory),
            _ => Err(Error::InvalidArgument(format!(
                "invalid snippet: '{s}' (expected: iterable, iterator-factory, or generator-factory)"
            ))),
        }
    }
}

/// Validated dotted Java package name.
///
/// Every segment must start with a letter or underscore and contain only
/// ASCII alphanumerics and underscores.
///
/// # Examples
///
/// ```
/// use neogen_core::PackageName;
/// use std::path::PathBuf;
///
/// let base = PackageName::new("net.ericaro.neoitertools").unwrap();
/// let sub = base.child("generators.primitives").unwrap();
/// assert_eq!(sub.as_str(), "net.ericaro.neoitertools.generators.primitives");
/// assert_eq!(
///     sub.to_relative_path(),
///     PathBuf::from("net/ericaro/neoitertools/generators/primitives"),
/// );
///
/// assert!(PackageName::new("net..ericaro").is_err());
/// assert!(PackageName::new("9lives").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageName(String);

impl PackageName {
    /// Creates a validated package name.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or any segment is not
    /// a valid Java identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(Error::ValidationError {
                field: "package".to_string(),
                reason: "package name cannot be empty".to_string(),
            });
        }

        for segment in trimmed.split('.') {
            if !is_identifier(segment) {
                return Err(Error::ValidationError {
                    field: "package".to_string(),
                    reason: format!("invalid segment '{segment}' in package '{trimmed}'"),
                });
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the package as a dotted string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a dotted sub-package.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `sub` is not a valid package name.
    pub fn child(&self, sub: &str) -> Result<Self> {
        Self::new(format!("{}.{sub}", self.0))
    }

    /// Converts the package to a relative directory path.
    #[must_use]
    pub fn to_relative_path(&self) -> PathBuf {
        self.0.split('.').collect()
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        let primitives: Vec<_> = catalog.iter().map(TypePair::primitive).collect();
        assert_eq!(
            primitives,
            ["byte", "char", "short", "int", "long", "float", "double", "boolean"]
        );
    }

    #[test]
    fn test_builtin_catalog_boxed_names() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("char").unwrap().boxed(), "Character");
        assert_eq!(catalog.find("int").unwrap().boxed(), "Integer");
        assert!(catalog.find("void").is_none());
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(builtin, rebuilt);
    }

    #[test]
    fn test_catalog_rejects_empty_names() {
        let result = Catalog::new(vec![TypePair::new("", "Integer")]);
        assert!(result.unwrap_err().is_validation_error());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }

    #[test]
    fn test_file_names_are_distinct_per_kind() {
        let catalog = Catalog::builtin();
        for kind in GeneratorKind::ALL {
            let names: HashSet<_> = catalog.iter().map(|p| kind.file_name(p)).collect();
            assert_eq!(names.len(), catalog.len());
        }
    }

    #[test]
    fn test_generator_kind_layout() {
        let pair = TypePair::new("double", "Double");
        assert_eq!(GeneratorKind::Iterator.file_name(&pair), "DoubleIterator.java");
        assert_eq!(GeneratorKind::Generator.file_name(&pair), "DoubleGenerator.java");
        assert_eq!(GeneratorKind::Iterator.sub_package(), "primitives");
        assert_eq!(GeneratorKind::Generator.sub_package(), "generators.primitives");
    }

    #[test]
    fn test_default_snippets() {
        assert_eq!(GeneratorKind::Iterator.default_snippet(), SnippetKind::Iterable);
        assert_eq!(
            GeneratorKind::Generator.default_snippet(),
            SnippetKind::GeneratorFactory
        );
    }

    #[test]
    fn test_snippet_kind_parsing() {
        assert_eq!("iterable".parse::<SnippetKind>().unwrap(), SnippetKind::Iterable);
        assert_eq!(
            "Iterator-Factory".parse::<SnippetKind>().unwrap(),
            SnippetKind::IteratorFactory
        );
        assert!("lambda".parse::<SnippetKind>().is_err());
    }

    #[test]
    fn test_package_name_validation() {
        assert!(PackageName::new("net.ericaro.neoitertools").is_ok());
        assert!(PackageName::new("_internal.v2").is_ok());
        assert!(PackageName::new("").is_err());
        assert!(PackageName::new("net.").is_err());
        assert!(PackageName::new("net/ericaro").is_err());
        assert!(PackageName::new("net.eric-aro").is_err());
    }

    #[test]
    fn test_package_name_trims_whitespace() {
        let name = PackageName::new("  net.ericaro  ").unwrap();
        assert_eq!(name.as_str(), "net.ericaro");
    }

    #[test]
    fn test_type_pair_display() {
        assert_eq!(TypePair::new("long", "Long").to_string(), "long/Long");
    }
}
