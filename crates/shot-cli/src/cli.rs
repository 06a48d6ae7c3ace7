use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `propshot` binary.
#[derive(Debug, Parser)]
#[command(
    name = "propshot",
    version,
    about = "Generate prop fixtures and snapshot tests for a UI component"
)]
pub struct Cli {
    /// Path to the component source file
    pub path: Option<PathBuf>,

    /// Print both generated modules instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
