//! Filename sources for namecols.
//!
//! `namecols-input` collects the raw filenames a summary is built from,
//! either by listing a directory or by reading a filename list piped on
//! stdin, with automatic fallback between the two.
//!
//! # Quick Start
//!
//! ```no_run
//! use namecols_input::{DirectorySource, SourceChain, StdinSource};
//!
//! let directory: Option<&str> = None;
//!
//! // Use the directory if one was given, otherwise piped stdin
//! let resolved = SourceChain::new()
//!     .try_optional(directory.map(DirectorySource::new))
//!     .try_source(StdinSource::new())
//!     .resolve()?;
//! # Ok::<(), namecols_input::InputError>(())
//! ```
//!
//! # Architecture
//!
//! The crate is built around the [`FilenameSource`] trait, which all sources
//! implement. Sources are composed into a [`SourceChain`] that tries each
//! source in order until one provides filenames.
//!
//! ```text
//! SourceChain
//! ├── DirectorySource → (only added when a directory is given)
//! └── StdinSource     → None when stdin is a terminal
//! ```
//!
//! Filenames are raw bytes and are never decoded here.
//!
//! # Testing
//!
//! Stdin and environment access go through [`StdinReader`](env::StdinReader)
//! and [`EnvReader`](env::EnvReader), with mocks for tests:
//!
//! ```
//! use namecols_input::{StdinSource, env::MockStdin};
//!
//! let source = StdinSource::with_reader(MockStdin::piped("a.txt\nb.txt"));
//! ```

mod chain;
mod collector;
pub mod env;
mod error;
pub mod sources;

pub use chain::SourceChain;
pub use collector::{FilenameSource, Filenames, ResolvedFilenames, SourceKind};
pub use error::InputError;

pub use sources::{split_lines, DirectorySource, StdinSource};

pub use env::{EnvReader, MockEnv, MockStdin, RealEnv, RealStdin, StdinReader};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
