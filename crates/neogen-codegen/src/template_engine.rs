//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in Java and wiki
//! templates pre-registered.
//!
//! Substitution is plain placeholder replacement: HTML escaping is disabled
//! (generic types such as `Iterator<{{Type}}>` must come out verbatim) and
//! strict mode turns a placeholder without a value into an error instead of
//! an empty string.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! engine.register_template_string("box", "{{type}} -> {{Type}}").unwrap();
//!
//! let rendered = engine.render("box", &json!({"type": "int", "Type": "Integer"})).unwrap();
//! assert_eq!(rendered, "int -> Integer");
//! ```

use handlebars::Handlebars;
use neogen_core::{Error, Result};
use serde::Serialize;

/// Built-in templates, keyed by registration name.
const BUILTIN_TEMPLATES: [(&str, &str); 6] = [
    (
        "primitives/iterator",
        include_str!("../templates/primitives/iterator.java.hbs"),
    ),
    (
        "primitives/generator",
        include_str!("../templates/primitives/generator.java.hbs"),
    ),
    (
        "snippets/iterable",
        include_str!("../templates/snippets/iterable.java.hbs"),
    ),
    (
        "snippets/iterator-factory",
        include_str!("../templates/snippets/iterator-factory.java.hbs"),
    ),
    (
        "snippets/generator-factory",
        include_str!("../templates/snippets/generator-factory.java.hbs"),
    ),
    ("wiki/stub", include_str!("../templates/wiki/stub.wiki.hbs")),
];

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    template: name.to_string(),
                    message: format!("Failed to register template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A placeholder used by the template has no value in the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// Registering under an existing name replaces that template.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("Failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template is registered under `name`.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
