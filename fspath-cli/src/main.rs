//! Main entry point for the fspath CLI.
//!
//! Commands:
//! - `info`: Show everything known about a path
//! - `cat`: Print a file's text or a directory's entries
//! - `ls`: List directory entries
//! - `parent`: Print the parent directory of a path
//! - `check`: Check a path predicate through the exit code
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use fspath_cli::cli::{Cli, Command};
use fspath_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library `log` records to stderr at the requested verbosity
    if fspath::init_logger(cli.verbose, cli.quiet).install().is_err() {
        eprintln!("Warning: logger already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        format: cli.format,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        Command::Info(cmd) => cmd.execute(&global),
        Command::Cat(cmd) => cmd.execute(&global),
        Command::Ls(cmd) => cmd.execute(&global),
        Command::Parent(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !(global.quiet && e.exit_code() == 1) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
