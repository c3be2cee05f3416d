//! Primitive array iterator and generator classes.
//!
//! For every pair of the catalog a run renders one Java class file and one
//! inline snippet. The snippets are meant to be pasted by hand into the
//! aggregator classes (`Iterators`, `Iterables`, `Generators`), so they are
//! returned separately from the files.
//!
//! # File Structure
//!
//! For the iterator kind and the default base package:
//!
//! ```text
//! src/main/java/net/ericaro/neoitertools/primitives/
//! ├── ByteIterator.java
//! ├── CharacterIterator.java
//! ├── ...
//! └── BooleanIterator.java
//! ```

pub mod generator;
pub mod types;

pub use generator::PrimitiveGenerator;
pub use types::{Emission, FileContext};
