//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::SnippetChoice;

/// neogen - boilerplate generator for the neoitertools Java library.
///
/// Writes one iterator or generator class per primitive type, prints the
/// matching factory snippets for copy-paste, and creates wiki stub pages
/// for the library's classes.
#[derive(Parser, Debug)]
#[command(name = "neogen")]
#[command(version, about, long_about = None)]
#[command(author = "Neoitertools Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Project root containing neogen.toml (defaults to the current directory)
    #[arg(short, long, global = true, env = "NEOGEN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the run summary (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate primitive array iterator classes.
    ///
    /// Writes `<Boxed>Iterator.java` for every primitive type into the
    /// `primitives` sub-package and prints the selected snippet per type.
    ///
    /// # Examples
    ///
    /// ```bash
    /// neogen iterators
    /// neogen iterators --snippet iterator-factory --dry-run
    /// ```
    Iterators {
        /// Snippet printed for each type
        #[arg(long, value_enum, default_value_t = SnippetChoice::Iterable)]
        snippet: SnippetChoice,

        /// Output directory (defaults to the configured package directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print planned paths without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate primitive array generator classes.
    ///
    /// Writes `<Boxed>Generator.java` for every primitive type into the
    /// `generators.primitives` sub-package and prints one factory method per
    /// type.
    Generators {
        /// Output directory (defaults to the configured package directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print planned paths without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate wiki stub pages for every source file.
    ///
    /// # Examples
    ///
    /// ```bash
    /// neogen wiki --target ../neoitertools-wiki
    /// ```
    Wiki {
        /// Source root to scan (defaults to the configured source directory)
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Directory receiving the stubs (defaults to the configured wiki directory)
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Print planned paths without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Run iterators, generators, then wiki with configured defaults.
    All {
        /// Print planned paths without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// neogen completions bash > /etc/bash_completion.d/neogen
    /// ```
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
