//! Code generation for neoitertools primitive support classes.
//!
//! Renders Handlebars templates once per entry of the primitive
//! [`Catalog`](neogen_core::Catalog) into Java source files and copy-paste
//! snippets, and renders one wiki stub page per discovered source file.
//!
//! Generators are pure: they return [`GeneratedCode`] values and leave
//! writing to the caller.
//!
//! # Examples
//!
//! ```
//! use neogen_codegen::PrimitiveGenerator;
//! use neogen_core::{Catalog, GeneratorKind, PackageName};
//!
//! let package = PackageName::new("net.ericaro.neoitertools").unwrap();
//! let generator = PrimitiveGenerator::new(package).unwrap();
//! let emission = generator
//!     .generate(&Catalog::builtin(), GeneratorKind::Iterator, None)
//!     .unwrap();
//!
//! assert_eq!(emission.code.file_count(), 8);
//! assert_eq!(emission.snippets.len(), 8);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod common;
pub mod primitives;
pub mod template_engine;
pub mod wiki;

pub use common::types::{GeneratedCode, GeneratedFile};
pub use primitives::{Emission, PrimitiveGenerator};
pub use template_engine::TemplateEngine;
pub use wiki::{DiscoveredEntry, WikiGenerator, discover};
