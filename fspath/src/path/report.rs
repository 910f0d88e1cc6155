//! Point-in-time summary of everything a path can answer.

use serde::Serialize;

use super::FsPath;

/// Every pure and status query for one path, taken together.
///
/// The status fields are sampled one after another; they are not an atomic
/// view of the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// The normalized path.
    pub path: FsPath,
    /// Result of [`FsPath::directory_name`].
    pub directory_name: String,
    /// Result of [`FsPath::extension`].
    pub extension: String,
    /// Result of [`FsPath::exists`].
    pub exists: bool,
    /// Result of [`FsPath::is_directory`].
    pub is_directory: bool,
    /// Result of [`FsPath::is_file`].
    pub is_file: bool,
    /// Result of [`FsPath::is_symbolic_link`].
    pub is_symbolic_link: bool,
}

impl FsPath {
    /// Collect a [`PathReport`] for this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// let report = FsPath::from("missing.txt").report();
    /// assert_eq!(report.extension, ".txt");
    /// assert!(!report.exists);
    /// ```
    #[must_use]
    pub fn report(&self) -> PathReport {
        PathReport {
            path: self.clone(),
            directory_name: self.directory_name(),
            extension: self.extension().to_string(),
            exists: self.exists(),
            is_directory: self.is_directory(),
            is_file: self.is_file(),
            is_symbolic_link: self.is_symbolic_link(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_current_dir() {
        let report = FsPath::current().report();
        assert_eq!(report.path.as_str(), ".");
        assert_eq!(report.directory_name, ".");
        assert_eq!(report.extension, "");
        assert!(report.exists);
        assert!(report.is_directory);
        assert!(!report.is_file);
        assert!(!report.is_symbolic_link);
    }
}
