//! Command to test a status predicate through the exit code.

use clap::Args;
use fspath::FsPath;

use crate::error::CliError;
use crate::utils::{build_path, shorten_path, GlobalOptions};

/// Exit 0 if the predicate holds for the path, 1 otherwise.
#[derive(Args)]
pub struct CheckCommand {
    /// Path segments, joined in order
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,

    #[command(flatten)]
    pub predicate: Predicate,
}

/// The predicate to evaluate; exactly one is required.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Predicate {
    /// The path resolves to an existing entry
    #[arg(long)]
    pub exists: bool,

    /// The path resolves to a directory
    #[arg(long)]
    pub dir: bool,

    /// The path resolves to a regular file
    #[arg(long)]
    pub file: bool,

    /// The path itself is a symbolic link
    #[arg(long)]
    pub symlink: bool,
}

impl Predicate {
    fn evaluate(&self, path: &FsPath) -> (bool, &'static str) {
        if self.exists {
            (path.exists(), "does not exist")
        } else if self.dir {
            (path.is_directory(), "is not a directory")
        } else if self.file {
            (path.is_file(), "is not a regular file")
        } else {
            (path.is_symbolic_link(), "is not a symbolic link")
        }
    }
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = build_path(&self.segments);
        let (holds, failure) = self.predicate.evaluate(&path);

        if holds {
            if global.verbose {
                eprintln!("{} ok", shorten_path(path.as_path()));
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Check failed: {} {failure}",
                shorten_path(path.as_path())
            )))
        }
    }
}
