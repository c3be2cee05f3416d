//! Wiki stub pages for the generated library's classes.
//!
//! Discovery walks a Java source root and yields one [`DiscoveredEntry`]
//! per source file; the [`WikiGenerator`] then renders one short stub page
//! per entry, named after the class:
//!
//! ```text
//! src/main/java/net/ericaro/neoitertools/Index.java
//!     -> DiscoveredEntry { package: "net.ericaro.neoitertools", type_name: "Index" }
//!     -> Index.wiki
//! ```

pub mod discovery;
pub mod generator;
pub mod types;

pub use discovery::{discover, discover_iter};
pub use generator::WikiGenerator;
pub use types::{DiscoveredEntry, StubContext};
