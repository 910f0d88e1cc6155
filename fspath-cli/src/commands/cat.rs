//! Command to print what a path contains.

use std::io::{self, Write};

use clap::Args;
use fspath::Contents;

use crate::error::CliError;
use crate::utils::{build_path, load_configuration, GlobalOptions};

/// Print a file's text verbatim, or a directory's entries.
#[derive(Args)]
pub struct CatCommand {
    /// Path segments, joined in order
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = build_path(&self.segments);

        match path.contents()? {
            Contents::Text(text) => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Contents::Entries(entries) => {
                let output = config
                    .output_format()
                    .create_formatter()
                    .format_entries(&entries)?;
                if !output.is_empty() {
                    println!("{output}");
                }
            }
        }

        Ok(())
    }
}
