//! Laying a [`Pattern`] out as aligned text rows.
//!
//! Each column is as wide as its widest entry. Entries are listed in
//! descending byte order from the bottom row up, so columns with fewer
//! entries than the tallest one leave blank cells at the top and every column
//! shares the bottom row as a baseline. `report_v1.txt`, `report_v2.txt` and
//! `summary_v1.txt` split on `_` and `.` render as:
//!
//! ```text
//! report    v1
//! summary _ v2 . txt
//! ```

use std::borrow::Cow;

use crate::pattern::Pattern;
use crate::text::{display_width, pad_right};

/// Renders patterns into rows of text.
///
/// ```rust
/// use namecols_engine::{tokenize, ColumnAccumulator, DelimiterSet, TableRenderer};
///
/// let delimiters = DelimiterSet::parse("_");
/// let mut accumulator = ColumnAccumulator::new();
/// for name in ["a_1", "a_2", "b_3"] {
///     accumulator.ingest(tokenize(name, &delimiters));
/// }
///
/// let rows = TableRenderer::new().render(accumulator.pattern());
/// assert_eq!(rows, ["    1", "a   2", "b _ 3"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableRenderer {
    column_limit: Option<usize>,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the terminal width the output is destined for.
    ///
    /// The limit is carried for callers to inspect; rows are never wrapped or
    /// truncated to fit it.
    pub fn with_column_limit(mut self, limit: Option<usize>) -> Self {
        self.column_limit = limit;
        self
    }

    pub fn column_limit(&self) -> Option<usize> {
        self.column_limit
    }

    /// Renders `pattern` into rows, top row first.
    ///
    /// Every row of the result has the same display width. An empty pattern
    /// renders no rows.
    pub fn render(&self, pattern: &Pattern) -> Vec<String> {
        self.render_with(pattern, Cow::Borrowed)
    }

    /// Renders `pattern` with every entry passed through `cell` first.
    ///
    /// Column widths are measured on the mapped text, so a mapping that
    /// changes widths (substituting `?` for characters an output encoding
    /// lacks) still yields rows of one width. Entry order is that of the
    /// unmapped entries.
    pub fn render_with<'p, F>(&self, pattern: &'p Pattern, cell: F) -> Vec<String>
    where
        F: Fn(&'p str) -> Cow<'p, str>,
    {
        let tallest = pattern.tallest_column();
        let mut rows = vec![String::new(); tallest];
        let last = pattern.len().saturating_sub(1);

        for (index, column) in pattern.columns().iter().enumerate() {
            let cells: Vec<Cow<'p, str>> = column.entries().map(&cell).collect();
            let width = cells.iter().map(|c| display_width(c)).max().unwrap_or(0);
            let blank = pad_right("", width);
            let empty_rows = tallest - cells.len();

            for row in rows.iter_mut().take(empty_rows) {
                row.push_str(&blank);
            }
            for (row, entry) in rows.iter_mut().rev().zip(cells.iter().rev()) {
                row.push_str(&pad_right(entry, width));
            }

            if index != last {
                for row in &mut rows {
                    row.push(' ');
                }
            }
        }

        rows
    }
}
