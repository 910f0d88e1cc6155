//! Library exports for fspath-cli.
//!
//! The binary in `main.rs` drives these modules; exposing them also lets
//! the man page and completion generators reach the CLI definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
