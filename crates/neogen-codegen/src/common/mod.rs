//! Types shared by the primitive and wiki generators.

pub mod types;

pub use types::{GeneratedCode, GeneratedFile};
