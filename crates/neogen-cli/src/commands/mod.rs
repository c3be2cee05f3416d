//! Command implementations for the neogen CLI.
//!
//! Each command resolves its paths from the project context, runs the
//! generators, writes (or plans) the files, and prints a summary in the
//! requested format.

pub mod all;
pub mod common;
pub mod completions;
pub mod primitives;
pub mod wiki;
