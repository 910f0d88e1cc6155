//! Output formatter implementations.

use std::fmt::Write;

use crate::path::{DirEntry, PathReport};
use crate::Result;

use super::OutputFormatter;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &PathReport) -> Result<String> {
        let mut output = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(output, "Path: {}", report.path);
        let _ = writeln!(output, "Parent: {}", report.directory_name);
        if !report.extension.is_empty() {
            let _ = writeln!(output, "Extension: {}", report.extension);
        }
        let _ = writeln!(output, "Exists: {}", yes_no(report.exists));
        let _ = writeln!(output, "Directory: {}", yes_no(report.is_directory));
        let _ = writeln!(output, "File: {}", yes_no(report.is_file));
        let _ = write!(output, "Symbolic link: {}", yes_no(report.is_symbolic_link));
        Ok(output)
    }

    fn format_entries(&self, entries: &[DirEntry]) -> Result<String> {
        let width = entries.iter().map(|e| e.kind().to_string().len()).max().unwrap_or(0);
        Ok(entries
            .iter()
            .map(|entry| format!("{:<width$}  {}", entry.kind().to_string(), entry.name()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_entries(&self, entries: &[DirEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format_report(&self, report: &PathReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?.trim_end().to_string())
    }

    fn format_entries(&self, entries: &[DirEntry]) -> Result<String> {
        Ok(serde_yaml::to_string(entries)?.trim_end().to_string())
    }
}
