//! CLI structure and command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fspath::OutputFormat;

use crate::commands::{
    CatCommand, CheckCommand, CompletionsCommand, InfoCommand, LsCommand, ParentCommand,
};

/// Inspect filesystem paths.
#[derive(Parser)]
#[command(name = "fspath")]
#[command(version, about = "Inspect filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Output format (human, json, yaml)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "FSPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show everything known about a path
    Info(InfoCommand),

    /// Print a file's text or a directory's entries
    Cat(CatCommand),

    /// List directory entries
    Ls(LsCommand),

    /// Print the parent directory of a path
    Parent(ParentCommand),

    /// Check a path predicate through the exit code
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
