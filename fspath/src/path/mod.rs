//! Immutable path values and the queries they answer.
//!
//! # Key Concepts
//!
//! ## Construction
//!
//! An [`FsPath`] is built from one or more segments, each a string or another
//! `FsPath`. Segments are joined left to right and normalized lexically; see
//! [`normalize`] for the exact rules. Construction never touches the
//! filesystem and never fails.
//!
//! ## Pure queries
//!
//! [`FsPath::directory_name`], [`FsPath::extension`] and [`FsPath::parent`]
//! are string transforms on the normalized value.
//!
//! ## Status predicates
//!
//! [`FsPath::exists`], [`FsPath::is_directory`], [`FsPath::is_file`] and
//! [`FsPath::is_symbolic_link`] each perform one status call and answer
//! `false` on any error. Only `is_symbolic_link` looks at the link itself;
//! the others follow it.
//!
//! ## Contents
//!
//! [`FsPath::contents`] returns file text or directory entries and is the
//! only query that reports errors.
//!
//! # Examples
//!
//! ```
//! use fspath::{fspath, FsPath};
//!
//! let manifest = FsPath::from(env!("CARGO_MANIFEST_DIR"));
//! let lib = fspath!(manifest, "src", "lib.rs");
//!
//! assert!(lib.is_file());
//! assert_eq!(lib.extension(), ".rs");
//! assert_eq!(lib.parent().parent(), manifest);
//! ```

mod contents;
mod fs_path;
pub mod normalize;
mod report;
mod segment;
mod status;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use contents::{Contents, DirEntry, EntryKind};
pub use fs_path::FsPath;
pub use report::PathReport;
pub use segment::{AsSegment, Segment};
