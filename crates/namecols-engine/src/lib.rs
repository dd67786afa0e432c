//! # namecols-engine - Filename Pattern Summaries
//!
//! `namecols-engine` finds the naming pattern shared by a collection of
//! filenames. Every filename is split into tokens, token `n` of every filename
//! is collected into column `n`, and the distinct tokens of each column are
//! laid out as a small aligned table.
//!
//! This crate is the engine behind the `namecols` command-line tool, but it
//! has no I/O of its own and can be driven from any source of filenames.
//!
//! ## Core Concepts
//!
//! - [`TextService`]: decodes raw filename bytes to NFC UTF-8 and encodes output
//! - [`DelimiterSet`]: the grapheme clusters that split filenames
//! - [`tokenize`]: lazily splits one normalized filename into [`Token`]s
//! - [`ColumnAccumulator`]: folds token sequences into a [`Pattern`] of [`Column`]s
//! - [`TableRenderer`]: lays a pattern out as rows of text
//! - [`Summarizer`]: all of the above for a batch of raw filenames
//!
//! ## Quick Start
//!
//! ```rust
//! use namecols_engine::{DelimiterSet, Summarizer};
//!
//! let mut summarizer = Summarizer::new(DelimiterSet::parse("_."));
//! for name in ["img_001.png", "img_002.png", "thumb_001.jpg"] {
//!     summarizer.input_filename(name.as_bytes()).unwrap();
//! }
//!
//! for row in summarizer.render() {
//!     println!("{}", row);
//! }
//! // img     001   jpg
//! // thumb _ 002 . png
//! ```
//!
//! ## Tokens and Columns
//!
//! Tokenization works on grapheme clusters, not bytes or code points, so a
//! letter with combining accents is never split. Each delimiter occurrence is
//! its own token; the characters between delimiters form a single run token.
//! An empty delimiter set splits every cluster.
//!
//! Within a column, entries are unique and ordered by the bytes of their
//! normalized UTF-8 text. Columns are only ever appended, so a pattern has as
//! many columns as the filename with the most tokens.

pub mod delimiters;
pub mod error;
pub mod pattern;
pub mod render;
pub mod summarizer;
pub mod text;
pub mod tokenizer;

pub use delimiters::DelimiterSet;
pub use error::TextError;
pub use pattern::{Column, ColumnAccumulator, Pattern};
pub use render::TableRenderer;
pub use summarizer::{ColumnReport, PatternReport, SkippedFilename, Summarizer};
pub use text::{display_width, Encoding, Replacement, TextConfig, TextService};
pub use tokenizer::{tokenize, Token, Tokens};

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
