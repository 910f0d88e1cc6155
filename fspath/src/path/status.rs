//! Filesystem status predicates.
//!
//! Each predicate performs exactly one status call and reports `false` on
//! any failure. Failures other than "not found" are logged at debug level
//! so a permission problem is still visible with verbose logging.

use std::fs::Metadata;
use std::io::{self, ErrorKind};
use std::path::Path;

use super::FsPath;

impl FsPath {
    /// Whether the path resolves, following symbolic links, to any entry.
    ///
    /// A broken symbolic link does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert!(FsPath::current().exists());
    /// assert!(!FsPath::from("/non/existent/path/12345").exists());
    /// ```
    #[must_use]
    pub fn exists(&self) -> bool {
        self.status("exists", Path::metadata).is_some()
    }

    /// Whether the resolved target is a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::FsPath;
    ///
    /// assert!(FsPath::from("").is_directory());
    /// ```
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.status("is_directory", Path::metadata)
            .is_some_and(|metadata| metadata.is_dir())
    }

    /// Whether the resolved target is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.status("is_file", Path::metadata)
            .is_some_and(|metadata| metadata.is_file())
    }

    /// Whether the path itself is a symbolic link.
    ///
    /// The link is not followed, so this holds for broken links too.
    #[must_use]
    pub fn is_symbolic_link(&self) -> bool {
        self.status("is_symbolic_link", Path::symlink_metadata)
            .is_some_and(|metadata| metadata.file_type().is_symlink())
    }

    fn status(
        &self,
        query: &str,
        stat: impl FnOnce(&Path) -> io::Result<Metadata>,
    ) -> Option<Metadata> {
        match stat(self.as_path()) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::debug!("{query}({self}) treated as false: {e}");
                }
                None
            }
        }
    }
}
