//! Core types, configuration, and errors for neogen.
//!
//! This crate provides the foundational types shared by the template,
//! filesystem, and CLI crates of the workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The primitive type catalog (`TypePair`, `Catalog`)
//! - Generation selectors (`GeneratorKind`, `SnippetKind`)
//! - Error hierarchy with contextual information
//! - Project configuration loaded from `neogen.toml`
//! - CLI value types (`OutputFormat`, `ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{CONFIG_FILE_NAME, ProjectConfig};
pub use error::{Error, Result};
pub use types::{Catalog, GeneratorKind, PackageName, SnippetKind, TypePair};
