//! Command to list a directory.

use clap::Args;
use fspath::DirEntry;

use crate::error::CliError;
use crate::utils::{build_path, load_configuration, GlobalOptions};

/// List directory entries.
#[derive(Args)]
pub struct LsCommand {
    /// Path segments, joined in order (default: .)
    #[arg(value_name = "SEGMENT")]
    pub segments: Vec<String>,

    /// Sort entries by name
    #[arg(long)]
    pub sort: bool,

    /// Include entries whose names start with a dot
    #[arg(short, long)]
    pub all: bool,
}

impl LsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = build_path(&self.segments);

        let show_hidden = self.all || config.show_hidden();
        let sort = self.sort || config.sort_entries();

        let entries = arrange(path.entries()?, show_hidden, sort);
        log::debug!("{} entries under {path}", entries.len());

        let output = config
            .output_format()
            .create_formatter()
            .format_entries(&entries)?;
        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }
}

fn arrange(mut entries: Vec<DirEntry>, show_hidden: bool, sort: bool) -> Vec<DirEntry> {
    if !show_hidden {
        entries.retain(|entry| !entry.is_hidden());
    }
    if sort {
        entries.sort_by(|a, b| a.name().cmp(b.name()));
    }
    entries
}
