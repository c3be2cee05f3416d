//! neogen CLI library.
//!
//! Exposes the argument definitions, command implementations and output
//! formatters of the `neogen` binary so they can be tested directly.

use clap::ValueEnum;
use neogen_core::SnippetKind;

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod runner;

/// Snippet printed by the `iterators` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SnippetChoice {
    /// Static `iter(array)` returning an `Iterable` (default).
    #[default]
    Iterable,
    /// Static `iter(array)` returning the generated `Iterator` directly.
    IteratorFactory,
}

impl From<SnippetChoice> for SnippetKind {
    fn from(choice: SnippetChoice) -> Self {
        match choice {
            SnippetChoice::Iterable => Self::Iterable,
            SnippetChoice::IteratorFactory => Self::IteratorFactory,
        }
    }
}
