#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fspath
//!
//! An immutable, lexically normalized filesystem path value with a small
//! set of live filesystem queries.
//!
//! ## Core Types
//!
//! - [`FsPath`]: The path value, built from any mix of strings and paths
//! - [`Contents`], [`DirEntry`] and [`EntryKind`]: Results of reading a path
//! - [`PathReport`]: Every query answer for one path, ready to serialize
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fspath::{fspath, FsPath};
//!
//! let base = FsPath::from("project");
//! let file = fspath!(base, "src", "..", "README.md");
//! assert_eq!(file, FsPath::new(["project", "README.md"]));
//! assert_eq!(file.extension(), ".md");
//! assert_eq!(file.parent(), base);
//!
//! // Status predicates never fail
//! assert!(!file.exists());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::OutputFormat;
pub use path::{AsSegment, Contents, DirEntry, EntryKind, FsPath, PathReport, Segment};
