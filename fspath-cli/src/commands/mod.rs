//! CLI command implementations.
//!
//! - `info`: Report everything known about a path
//! - `cat`: Print a file's text or a directory's entries
//! - `ls`: List a directory
//! - `parent`: Print an ancestor of a path
//! - `check`: Test one status predicate through the exit code
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod check;
pub mod completions;
pub mod info;
pub mod ls;
pub mod parent;

pub use cat::CatCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use info::InfoCommand;
pub use ls::LsCommand;
pub use parent::ParentCommand;
