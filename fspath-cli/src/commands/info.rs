//! Command to report every query answer for a path.

use clap::Args;

use crate::error::CliError;
use crate::utils::{build_path, load_configuration, GlobalOptions};

/// Show the normalized path, its parent, extension and status.
#[derive(Args)]
pub struct InfoCommand {
    /// Path segments, joined in order (default: .)
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = build_path(&self.segments);

        let report = path.report();
        let output = config
            .output_format()
            .create_formatter()
            .format_report(&report)?;

        println!("{output}");
        Ok(())
    }
}
