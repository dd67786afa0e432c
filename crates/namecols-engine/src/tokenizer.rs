//! Splitting a normalized filename into tokens.
//!
//! The scan walks grapheme clusters left to right. Clusters that are not
//! delimiters accumulate into a pending run; a delimiter flushes the run (if
//! any) and then becomes a token of its own. Whatever run remains at the end
//! of the filename is the final token.
//!
//! ```rust
//! use namecols_engine::{tokenize, DelimiterSet};
//!
//! let delimiters = DelimiterSet::parse("_.");
//! let tokens: Vec<&str> = tokenize("report_v1.txt", &delimiters)
//!     .map(|t| t.text())
//!     .collect();
//! assert_eq!(tokens, vec!["report", "_", "v1", ".", "txt"]);
//! ```

use std::iter::FusedIterator;

use unicode_segmentation::GraphemeIndices;

use crate::delimiters::DelimiterSet;
use crate::text::grapheme_indices;

/// One contiguous piece of a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    clusters: usize,
    delimiter: bool,
}

impl<'a> Token<'a> {
    fn run(text: &'a str, clusters: usize) -> Self {
        Self {
            text,
            clusters,
            delimiter: false,
        }
    }

    fn delimiter(text: &'a str) -> Self {
        Self {
            text,
            clusters: 1,
            delimiter: true,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of grapheme clusters this token spans.
    pub fn clusters(&self) -> usize {
        self.clusters
    }

    /// True if the token is a single delimiter cluster.
    pub fn is_delimiter(&self) -> bool {
        self.delimiter
    }
}

/// Tokenizes an already-normalized filename.
///
/// The returned iterator borrows both arguments and is single-pass; call
/// `tokenize` again for a fresh scan.
pub fn tokenize<'a>(filename: &'a str, delimiters: &'a DelimiterSet) -> Tokens<'a> {
    Tokens {
        filename,
        clusters: grapheme_indices(filename),
        delimiters,
        run_start: 0,
        run_clusters: 0,
        queued: None,
    }
}

/// Lazy token iterator returned by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    filename: &'a str,
    clusters: GraphemeIndices<'a>,
    delimiters: &'a DelimiterSet,
    run_start: usize,
    run_clusters: usize,
    // A delimiter found right after a run waits here while the run is yielded.
    queued: Option<Token<'a>>,
}

impl<'a> Tokens<'a> {
    /// Ends the pending run at `end`, returning it if it spans any clusters.
    fn take_run(&mut self, end: usize) -> Option<Token<'a>> {
        if self.run_clusters == 0 {
            return None;
        }
        let token = Token::run(&self.filename[self.run_start..end], self.run_clusters);
        self.run_start = end;
        self.run_clusters = 0;
        Some(token)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        while let Some((start, cluster)) = self.clusters.next() {
            if !self.delimiters.matches(cluster) {
                self.run_clusters += 1;
                continue;
            }

            let delimiter = Token::delimiter(cluster);
            let run = self.take_run(start);
            self.run_start = start + cluster.len();
            return match run {
                Some(run) => {
                    self.queued = Some(delimiter);
                    Some(run)
                }
                None => Some(delimiter),
            };
        }

        self.take_run(self.filename.len())
    }
}

impl FusedIterator for Tokens<'_> {}
