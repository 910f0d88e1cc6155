//! Command to print an ancestor of a path.

use clap::Args;

use crate::error::CliError;
use crate::utils::{build_path, GlobalOptions};

/// Print the parent directory, or a more distant ancestor.
#[derive(Args)]
pub struct ParentCommand {
    /// Path segments, joined in order (default: .)
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,

    /// How many levels to climb
    #[arg(long, short = 'n', default_value_t = 1, value_name = "N")]
    pub levels: u32,
}

impl ParentCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut path = build_path(&self.segments);
        for _ in 0..self.levels {
            let parent = path.parent();
            if parent == path {
                break;
            }
            path = parent;
        }

        println!("{path}");
        Ok(())
    }
}
