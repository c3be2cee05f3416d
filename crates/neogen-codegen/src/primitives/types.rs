//! Types for primitive class generation.

use crate::common::types::GeneratedCode;
use neogen_core::{GeneratorKind, SnippetKind, TypePair};
use serde::Serialize;

/// Context for rendering one primitive class file.
///
/// # Examples
///
/// ```
/// use neogen_codegen::primitives::FileContext;
/// use neogen_core::TypePair;
///
/// let pair = TypePair::new("short", "Short");
/// let ctx = FileContext::new(&pair, "a.b.primitives", "a.b");
///
/// let value = serde_json::to_value(&ctx).unwrap();
/// assert_eq!(value["type"], "short");
/// assert_eq!(value["Type"], "Short");
/// assert_eq!(value["package"], "a.b.primitives");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct FileContext<'a> {
    /// Primitive name, rendered by `{{type}}`
    #[serde(rename = "type")]
    pub primitive: &'a str,
    /// Boxed name, rendered by `{{Type}}`
    #[serde(rename = "Type")]
    pub boxed: &'a str,
    /// Package declared by the generated class
    pub package: &'a str,
    /// Base package of the library, for imports of shared interfaces
    pub base_package: &'a str,
}

impl<'a> FileContext<'a> {
    /// Builds the context for `pair` in `package`.
    #[must_use]
    pub fn new(pair: &'a TypePair, package: &'a str, base_package: &'a str) -> Self {
        Self {
            primitive: pair.primitive(),
            boxed: pair.boxed(),
            package,
            base_package,
        }
    }
}

/// Everything one generator run produces.
///
/// `code` holds one file per catalog pair; `snippets` holds one rendered
/// snippet per pair, both in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct Emission {
    /// Kind of classes generated
    pub kind: GeneratorKind,
    /// Snippet template used
    pub snippet: SnippetKind,
    /// Package the generated classes are declared in
    pub package: String,
    /// Generated class files, paths relative to the package directory
    pub code: GeneratedCode,
    /// Rendered snippets, in catalog order
    pub snippets: Vec<String>,
}

impl Emission {
    /// Creates an empty emission.
    #[must_use]
    pub const fn new(kind: GeneratorKind, snippet: SnippetKind, package: String) -> Self {
        Self {
            kind,
            snippet,
            package,
            code: GeneratedCode::new(),
            snippets: Vec::new(),
        }
    }

    /// Returns the snippets as one block, each followed by a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use neogen_codegen::Emission;
    /// use neogen_core::{GeneratorKind, SnippetKind};
    ///
    /// let mut emission = Emission::new(
    ///     GeneratorKind::Iterator,
    ///     SnippetKind::Iterable,
    ///     "p".to_string(),
    /// );
    /// emission.snippets.push("a".to_string());
    /// emission.snippets.push("b".to_string());
    /// assert_eq!(emission.snippet_block(), "a\nb\n");
    /// ```
    #[must_use]
    pub fn snippet_block(&self) -> String {
        self.snippets.iter().fold(String::new(), |mut block, s| {
            block.push_str(s);
            block.push('\n');
            block
        })
    }
}
