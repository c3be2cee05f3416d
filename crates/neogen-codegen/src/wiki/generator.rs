//! Wiki stub generator.

use crate::common::types::{GeneratedCode, GeneratedFile};
use crate::template_engine::TemplateEngine;
use crate::wiki::types::{DiscoveredEntry, StubContext};
use neogen_core::Result;

const STUB_TEMPLATE: &str = "wiki/stub";

/// Renders one wiki stub page per discovered source file.
///
/// Pages are named `<TypeName>.<suffix>` and live in a single flat
/// directory, so type names that appear in several packages collide. The
/// later entry wins and a warning is logged.
///
/// # Examples
///
/// ```
/// use neogen_codegen::{DiscoveredEntry, WikiGenerator};
/// use std::path::PathBuf;
///
/// let entry = DiscoveredEntry {
///     package: "net.ericaro.neoitertools".to_string(),
///     type_name: "Index".to_string(),
///     source_path: PathBuf::from("Index.java"),
/// };
///
/// let code = WikiGenerator::new()?.generate(&[entry], "wiki")?;
/// assert_eq!(code.paths(), ["Index.wiki"]);
/// assert!(code.files[0].content.contains("net.ericaro.neoitertools.Index"));
/// # Ok::<(), neogen_core::Error>(())
/// ```
#[derive(Debug)]
pub struct WikiGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> WikiGenerator<'a> {
    /// Creates a wiki generator with the built-in stub template.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self::with_engine(TemplateEngine::new()?))
    }

    /// Creates a wiki generator using an existing template engine.
    #[must_use]
    pub const fn with_engine(engine: TemplateEngine<'a>) -> Self {
        Self { engine }
    }

    /// Renders the stub page for a single entry.
    ///
    /// # Errors
    ///
    /// Returns error if the stub template fails to render.
    pub fn render_stub(&self, entry: &DiscoveredEntry) -> Result<String> {
        self.engine.render(STUB_TEMPLATE, &StubContext::from(entry))
    }

    /// Renders stub pages for all entries, in entry order.
    ///
    /// # Errors
    ///
    /// Returns error if any stub fails to render.
    pub fn generate(&self, entries: &[DiscoveredEntry], suffix: &str) -> Result<GeneratedCode> {
        let mut code = GeneratedCode::new();

        for entry in entries {
            let path = format!("{}.{suffix}", entry.type_name);
            let content = self.render_stub(entry)?;
            tracing::debug!("Rendered stub for {}", entry.qualified_name());

            if let Some(replaced) = code.upsert_file(GeneratedFile { path, content }) {
                tracing::warn!(
                    "Wiki page {} for {} overwritten by {}",
                    replaced.path,
                    entry.type_name,
                    entry.qualified_name()
                );
            }
        }

        tracing::info!(
            "Generated {} wiki pages from {} entries",
            code.file_count(),
            entries.len()
        );

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(package: &str, type_name: &str) -> DiscoveredEntry {
        DiscoveredEntry {
            package: package.to_string(),
            type_name: type_name.to_string(),
            source_path: PathBuf::from(format!("{type_name}.java")),
        }
    }

    #[test]
    fn test_render_stub_exact() {
        let generator = WikiGenerator::new().unwrap();
        let stub = generator
            .render_stub(&entry("net.ericaro.neoitertools", "Index"))
            .unwrap();

        assert_eq!(
            stub,
            "#summary Index wiki\n\
             #labels Javadoc-Wiki\n\
             #sidebar TableOfContents\n\
             \n\
             Leave a comment here to discuss issues about net.ericaro.neoitertools.Index\n\n"
        );
    }

    #[test]
    fn test_render_stub_without_package() {
        let generator = WikiGenerator::new().unwrap();
        let stub = generator.render_stub(&entry("", "Main")).unwrap();

        assert!(stub.contains("discuss issues about Main\n"));
        assert!(!stub.contains(".Main"));
    }

    #[test]
    fn test_generate_one_page_per_entry() {
        let generator = WikiGenerator::new().unwrap();
        let code = generator
            .generate(&[entry("a", "Foo"), entry("a.b", "Bar")], "wiki")
            .unwrap();

        assert_eq!(code.paths(), ["Foo.wiki", "Bar.wiki"]);
    }

    #[test]
    fn test_generate_custom_suffix() {
        let generator = WikiGenerator::new().unwrap();
        let code = generator.generate(&[entry("a", "Foo")], "md").unwrap();

        assert_eq!(code.paths(), ["Foo.md"]);
    }

    #[test]
    fn test_generate_duplicate_type_last_wins() {
        let generator = WikiGenerator::new().unwrap();
        let code = generator
            .generate(&[entry("a", "Foo"), entry("b", "Foo")], "wiki")
            .unwrap();

        assert_eq!(code.file_count(), 1);
        assert!(code.files[0].content.contains("about b.Foo"));
    }

    #[test]
    fn test_generate_empty() {
        let generator = WikiGenerator::new().unwrap();
        let code = generator.generate(&[], "wiki").unwrap();

        assert_eq!(code.file_count(), 0);
    }

    #[test]
    fn test_overridden_stub_template() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string(STUB_TEMPLATE, "= {{type}} =")
            .unwrap();
        let generator = WikiGenerator::with_engine(engine);

        let stub = generator.render_stub(&entry("a", "Foo")).unwrap();
        assert_eq!(stub, "= Foo =");
    }
}
