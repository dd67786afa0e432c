//! Core filename source trait.
//!
//! The [`FilenameSource`] trait defines the interface for every place
//! filenames can come from. Sources are composed into a
//! [`SourceChain`](crate::SourceChain) that tries each in order.

use crate::InputError;

/// Raw filenames, in the order the source produced them.
pub type Filenames = Vec<Vec<u8>>;

/// A source of raw filenames.
///
/// Filenames are raw bytes: on Unix a filename is any byte string without
/// `/` or NUL, and decoding is the engine's job.
///
/// # Implementation Guidelines
///
/// - [`is_available`](Self::is_available) should return `false` if this
///   source cannot provide filenames in the current environment (stdin is a
///   terminal, say).
/// - [`collect`](Self::collect) returns `Ok(None)` to mean "try the next
///   source". Return `Err` only for actual failures.
pub trait FilenameSource {
    /// Human-readable name for this source, used in logs.
    fn name(&self) -> &'static str;

    /// The kind of source, reported back with the filenames.
    fn kind(&self) -> SourceKind;

    /// Check if this source can provide filenames right now.
    fn is_available(&self) -> bool;

    /// Collect every filename this source provides.
    fn collect(&self) -> Result<Option<Filenames>, InputError>;
}

/// Filenames together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilenames {
    pub filenames: Filenames,
    pub source: SourceKind,
}

/// The kind of source that provided filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Entries of a directory.
    Directory,
    /// Lines of piped stdin.
    Stdin,
}
