//! Primitive class generator.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::PrimitiveGenerator;
//! use neogen_core::{Catalog, GeneratorKind, PackageName, SnippetKind};
//!
//! let generator = PrimitiveGenerator::new(PackageName::new("net.ericaro.neoitertools")?)?;
//! let emission = generator.generate(
//!     &Catalog::builtin(),
//!     GeneratorKind::Generator,
//!     Some(SnippetKind::GeneratorFactory),
//! )?;
//!
//! assert_eq!(emission.package, "net.ericaro.neoitertools.generators.primitives");
//! assert_eq!(emission.code.paths()[0], "ByteGenerator.java");
//! # Ok::<(), neogen_core::Error>(())
//! ```

use crate::common::types::GeneratedFile;
use crate::primitives::types::{Emission, FileContext};
use crate::template_engine::TemplateEngine;
use neogen_core::{Catalog, GeneratorKind, PackageName, Result, SnippetKind};

/// Generator for primitive array iterator and generator classes.
#[derive(Debug)]
pub struct PrimitiveGenerator<'a> {
    engine: TemplateEngine<'a>,
    base_package: PackageName,
}

impl<'a> PrimitiveGenerator<'a> {
    /// Creates a generator for classes below `base_package`.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(base_package: PackageName) -> Result<Self> {
        Ok(Self::with_engine(TemplateEngine::new()?, base_package))
    }

    /// Creates a generator using an existing template engine.
    ///
    /// Useful to render with overridden templates.
    #[must_use]
    pub const fn with_engine(engine: TemplateEngine<'a>, base_package: PackageName) -> Self {
        Self {
            engine,
            base_package,
        }
    }

    /// Renders one class file and one snippet per catalog pair.
    ///
    /// `snippet` defaults to [`GeneratorKind::default_snippet`]. The result
    /// depends only on the arguments, so repeated runs are byte-identical.
    ///
    /// # Errors
    ///
    /// Returns error if the kind's package is invalid or a template fails to
    /// render. Nothing is returned for the pairs already rendered.
    pub fn generate(
        &self,
        catalog: &Catalog,
        kind: GeneratorKind,
        snippet: Option<SnippetKind>,
    ) -> Result<Emission> {
        let snippet = snippet.unwrap_or_else(|| kind.default_snippet());
        let package = self.base_package.child(kind.sub_package())?;

        tracing::info!(
            "Generating {} {} classes in {}",
            catalog.len(),
            kind,
            package
        );

        let emission = catalog.iter().try_fold(
            Emission::new(kind, snippet, package.to_string()),
            |mut emission, pair| {
                let context = FileContext::new(pair, package.as_str(), self.base_package.as_str());
                let content = self.engine.render(kind.template_name(), &context)?;
                let path = kind.file_name(pair);

                tracing::debug!("Generated {}", path);
                emission.code.add_file(GeneratedFile { path, content });
                emission
                    .snippets
                    .push(self.engine.render(snippet.template_name(), pair)?);

                Ok::<_, neogen_core::Error>(emission)
            },
        )?;

        tracing::info!(
            "Successfully generated {} files and {} snippets",
            emission.code.file_count(),
            emission.snippets.len()
        );

        Ok(emission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neogen_core::TypePair;

    fn generator() -> PrimitiveGenerator<'static> {
        PrimitiveGenerator::new(PackageName::new("net.ericaro.neoitertools").unwrap()).unwrap()
    }

    #[test]
    fn test_iterator_run_cardinality() {
        let emission = generator()
            .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
            .unwrap();

        assert_eq!(emission.code.file_count(), 8);
        assert_eq!(emission.snippets.len(), 8);
        assert_eq!(emission.snippet, SnippetKind::Iterable);
    }

    #[test]
    fn test_file_paths_follow_catalog_order() {
        let emission = generator()
            .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
            .unwrap();

        assert_eq!(
            emission.code.paths(),
            [
                "ByteIterator.java",
                "CharacterIterator.java",
                "ShortIterator.java",
                "IntegerIterator.java",
                "LongIterator.java",
                "FloatIterator.java",
                "DoubleIterator.java",
                "BooleanIterator.java",
            ]
        );
    }

    #[test]
    fn test_integer_iterator_content() {
        let emission = generator()
            .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
            .unwrap();
        let file = emission
            .code
            .files()
            .find(|f| f.path() == "IntegerIterator.java")
            .unwrap();

        assert!(file.content().contains("public class IntegerIterator"));
        assert!(file.content().contains("private int[] array;"));
        assert!(file.content().contains("package net.ericaro.neoitertools.primitives;"));
    }

    #[test]
    fn test_generator_kind_uses_generator_package() {
        let emission = generator()
            .generate(&Catalog::builtin(), GeneratorKind::Generator, None)
            .unwrap();

        assert_eq!(emission.package, "net.ericaro.neoitertools.generators.primitives");
        assert_eq!(emission.snippet, SnippetKind::GeneratorFactory);
        assert!(emission.snippets[0].contains("return new ByteGenerator(array);"));
    }

    #[test]
    fn test_explicit_snippet_overrides_default() {
        let emission = generator()
            .generate(
                &Catalog::builtin(),
                GeneratorKind::Iterator,
                Some(SnippetKind::IteratorFactory),
            )
            .unwrap();

        assert!(emission.snippets[3].contains("public static Iterator<Integer> iter(int[] array) {"));
        assert!(emission.snippets[3].contains("return new IntegerIterator(array);"));
    }

    #[test]
    fn test_custom_base_package() {
        let generator =
            PrimitiveGenerator::new(PackageName::new("org.example.iter").unwrap()).unwrap();
        let catalog = Catalog::new(vec![TypePair::new("float", "Float")]).unwrap();
        let emission = generator
            .generate(&catalog, GeneratorKind::Generator, None)
            .unwrap();

        let content = emission.code.files[0].content();
        assert!(content.starts_with("package org.example.iter.generators.primitives;"));
        assert!(content.contains("import org.example.iter.Generator;"));
    }

    #[test]
    fn test_empty_catalog_produces_nothing() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let emission = generator()
            .generate(&catalog, GeneratorKind::Iterator, None)
            .unwrap();

        assert_eq!(emission.code.file_count(), 0);
        assert!(emission.snippet_block().is_empty());
    }

    #[test]
    fn test_overridden_template_missing_placeholder_fails() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("primitives/iterator", "{{Type}} {{undefined_value}}")
            .unwrap();
        let generator = PrimitiveGenerator::with_engine(
            engine,
            PackageName::new("net.ericaro.neoitertools").unwrap(),
        );

        let err = generator
            .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
            .unwrap_err();
        assert!(err.is_template_error());
    }
}
