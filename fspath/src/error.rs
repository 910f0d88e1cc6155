//! Error types for the fspath library.
//!
//! Only content retrieval and the ambient layers (configuration, output)
//! report errors; the status predicates on [`FsPath`](crate::FsPath) never do.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an fspath error.
///
/// # Examples
///
/// ```
/// use fspath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("contents".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The path exists but is neither a regular file nor a directory.
    #[error("not a regular file or directory: {}", path.display())]
    NotFileOrDirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// File content is not valid UTF-8.
    #[error("invalid UTF-8 in {} at byte {valid_up_to}", path.display())]
    InvalidUtf8 {
        /// The file that was read.
        path: PathBuf,
        /// Length of the valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A YAML document could not be parsed or rendered.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Classify an I/O error raised while accessing `path`.
    ///
    /// Not-found and permission errors get their own variants so callers can
    /// match on them; everything else is wrapped as [`Error::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::Error::from(ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
                source: err,
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                source: err,
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/nonexistent"), io::Error::from(ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use fspath::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(
    ///     Path::new("/restricted"),
    ///     io::Error::from(ErrorKind::PermissionDenied),
    /// );
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
