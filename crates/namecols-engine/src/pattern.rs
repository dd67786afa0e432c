//! Column accumulation.
//!
//! A [`Pattern`] is the ordered list of [`Column`]s describing every filename
//! seen so far. The [`ColumnAccumulator`] owns it and is the only thing that
//! mutates it: token `n` of each filename goes into column `n`, columns are
//! appended as longer filenames arrive, and nothing is ever removed.

use std::collections::BTreeMap;

use crate::text::display_width;
use crate::tokenizer::Token;

/// The distinct tokens found at one position across all filenames.
///
/// Entries are kept in byte order of their normalized UTF-8 text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    // token text -> grapheme cluster count
    entries: BTreeMap<String, usize>,
    highest_width: usize,
    highest_clusters: usize,
}

impl Column {
    /// Inserts a token. Returns true if it was not already present.
    fn insert(&mut self, token: &Token<'_>) -> bool {
        self.highest_width = self.highest_width.max(display_width(token.text()));
        self.highest_clusters = self.highest_clusters.max(token.clusters());

        if self.entries.contains_key(token.text()) {
            return false;
        }
        self.entries
            .insert(token.text().to_string(), token.clusters());
        true
    }

    /// Entries in ascending byte order. Reverse it for descending order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains_key(entry)
    }

    /// Grapheme cluster count of an entry, if present.
    pub fn clusters_of(&self, entry: &str) -> Option<usize> {
        self.entries.get(entry).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Widest display width among the entries.
    pub fn highest_width(&self) -> usize {
        self.highest_width
    }

    /// Largest grapheme cluster count among the entries.
    pub fn highest_cluster_count(&self) -> usize {
        self.highest_clusters
    }
}

/// The full ordered sequence of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    columns: Vec<Column>,
}

impl Pattern {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Entry count of the largest column, zero for an empty pattern.
    pub fn tallest_column(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }
}

/// Folds token sequences into a [`Pattern`].
///
/// ```rust
/// use namecols_engine::{tokenize, ColumnAccumulator, DelimiterSet};
///
/// let delimiters = DelimiterSet::parse("_");
/// let mut accumulator = ColumnAccumulator::new();
/// accumulator.ingest(tokenize("a_1", &delimiters));
/// accumulator.ingest(tokenize("a_2", &delimiters));
///
/// let pattern = accumulator.pattern();
/// assert_eq!(pattern.len(), 3);
/// assert_eq!(pattern.columns()[0].len(), 1);
/// assert_eq!(pattern.columns()[2].len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnAccumulator {
    pattern: Pattern,
    greatest_common_chunk_index: Option<usize>,
    filenames: usize,
}

impl ColumnAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one filename's tokens, returning how many there were.
    pub fn ingest<'a, I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let columns = &mut self.pattern.columns;
        let mut position = 0;

        for token in tokens {
            if position == columns.len() {
                columns.push(Column::default());
            }
            columns[position].insert(&token);
            position += 1;
        }

        self.greatest_common_chunk_index = Some(match self.greatest_common_chunk_index {
            Some(current) => current.min(position),
            None => position,
        });
        self.filenames += 1;
        position
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn into_pattern(self) -> Pattern {
        self.pattern
    }

    /// Fewest tokens any ingested filename produced.
    ///
    /// Columns before this index are shared by every filename. `None` until
    /// the first filename is ingested.
    pub fn greatest_common_chunk_index(&self) -> Option<usize> {
        self.greatest_common_chunk_index
    }

    /// Number of filenames ingested so far.
    pub fn filenames(&self) -> usize {
        self.filenames
    }
}
