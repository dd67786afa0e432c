//! Error types for text processing.
//!
//! The engine has a single failure mode of its own: a filename that cannot be
//! turned into canonical text. Everything downstream of the [`TextService`]
//! (tokenizing, accumulating, rendering) is infallible.
//!
//! [`TextService`]: crate::text::TextService

use crate::text::Encoding;

/// Errors raised while converting raw filename bytes into canonical text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input is not valid in the source encoding and strict decoding was requested.
    #[error("invalid {encoding} sequence at byte {offset}")]
    Malformed {
        /// Encoding the bytes were decoded as.
        encoding: Encoding,
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// An encoding label that does not name a supported encoding.
    #[error("unknown encoding '{0}' (expected UTF-8, ISO-8859-1 or ASCII)")]
    UnknownEncoding(String),
}
