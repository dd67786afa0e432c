//! Filename source implementations.
//!
//! - [`DirectorySource`] - Entries of a directory, optionally recursive
//! - [`StdinSource`] - One filename per line of piped stdin

mod directory;
mod stdin;

pub use directory::DirectorySource;
pub use stdin::{split_lines, StdinSource};
