//! The end-to-end pipeline for a batch of filenames.
//!
//! [`Summarizer`] wires the pieces together: raw bytes go through the
//! [`TextService`], the tokenizer and the [`ColumnAccumulator`]; once every
//! filename is in, [`Summarizer::render`] lays the pattern out. Filenames the
//! text service rejects are skipped and remembered, never fatal.

use serde::Serialize;
use tracing::{debug, info};

use crate::delimiters::DelimiterSet;
use crate::error::TextError;
use crate::pattern::{ColumnAccumulator, Pattern};
use crate::render::TableRenderer;
use crate::text::{normalize, TextConfig, TextService};
use crate::tokenizer::tokenize;

/// A filename that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFilename {
    /// The filename exactly as it was supplied.
    pub raw: Vec<u8>,
    /// Why it was skipped.
    pub error: TextError,
}

impl SkippedFilename {
    /// The filename with control characters and invalid UTF-8 escaped.
    pub fn display_name(&self) -> String {
        let mut name = String::with_capacity(self.raw.len());
        for chunk in self.raw.utf8_chunks() {
            for c in chunk.valid().chars() {
                if c.is_control() {
                    name.extend(c.escape_default());
                } else {
                    name.push(c);
                }
            }
            name.push_str(&chunk.invalid().escape_ascii().to_string());
        }
        name
    }
}

/// Summarizes the naming pattern of a batch of filenames.
///
/// ```rust
/// use namecols_engine::{DelimiterSet, Summarizer};
///
/// let mut summarizer = Summarizer::new(DelimiterSet::parse("_."));
/// for name in ["report_v1.txt", "report_v2.txt", "summary_v1.txt"] {
///     summarizer.input_filename(name.as_bytes()).unwrap();
/// }
///
/// assert_eq!(summarizer.pattern().len(), 5);
/// assert_eq!(summarizer.render(), ["report    v1      ", "summary _ v2 . txt"]);
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    text: TextService,
    delimiters: DelimiterSet,
    accumulator: ColumnAccumulator,
    renderer: TableRenderer,
    skipped: Vec<SkippedFilename>,
}

impl Summarizer {
    /// Creates a summarizer with UTF-8 text handling and no column limit.
    pub fn new(delimiters: DelimiterSet) -> Self {
        Self {
            text: TextService::default(),
            delimiters,
            accumulator: ColumnAccumulator::new(),
            renderer: TableRenderer::new(),
            skipped: Vec::new(),
        }
    }

    /// Sets the encodings and replacement policy used for filenames and output.
    pub fn with_text_config(mut self, config: TextConfig) -> Self {
        self.text = TextService::new(config);
        self
    }

    /// Records the terminal width hint. See [`TableRenderer::with_column_limit`].
    pub fn with_column_limit(mut self, limit: Option<usize>) -> Self {
        self.renderer = self.renderer.with_column_limit(limit);
        self
    }

    /// Ingests one raw filename, returning its token count.
    ///
    /// # Errors
    ///
    /// Returns the [`TextError`] when the filename can't be decoded. The
    /// filename is recorded in [`Summarizer::skipped`] and the pattern is left
    /// untouched; later filenames are unaffected.
    pub fn input_filename(&mut self, raw: &[u8]) -> Result<usize, TextError> {
        match self.text.to_canonical(raw) {
            Ok(name) => Ok(self.ingest_canonical(&name)),
            Err(err) => {
                let skipped = SkippedFilename {
                    raw: raw.to_vec(),
                    error: err.clone(),
                };
                info!(filename = %skipped.display_name(), error = %err, "skipping filename");
                self.skipped.push(skipped);
                Err(err)
            }
        }
    }

    /// Ingests a filename that is already valid UTF-8.
    pub fn input_str(&mut self, name: &str) -> usize {
        self.ingest_canonical(&normalize(name))
    }

    fn ingest_canonical(&mut self, name: &str) -> usize {
        let tokens = self.accumulator.ingest(tokenize(name, &self.delimiters));
        debug!(filename = name, tokens, "ingested filename");
        tokens
    }

    pub fn pattern(&self) -> &Pattern {
        self.accumulator.pattern()
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    pub fn text_service(&self) -> &TextService {
        &self.text
    }

    /// See [`ColumnAccumulator::greatest_common_chunk_index`].
    pub fn greatest_common_chunk_index(&self) -> Option<usize> {
        self.accumulator.greatest_common_chunk_index()
    }

    /// Number of filenames successfully ingested.
    pub fn filenames_ingested(&self) -> usize {
        self.accumulator.filenames()
    }

    pub fn skipped(&self) -> &[SkippedFilename] {
        &self.skipped
    }

    pub fn column_limit(&self) -> Option<usize> {
        self.renderer.column_limit()
    }

    /// Renders the table as UTF-8 rows, top row first.
    pub fn render(&self) -> Vec<String> {
        self.renderer.render(self.pattern())
    }

    /// Renders the table with every row re-encoded to the output encoding.
    ///
    /// Cells are padded after substituting unrepresentable characters, so
    /// rows stay aligned in the output encoding.
    pub fn render_encoded(&self) -> Vec<Vec<u8>> {
        self.renderer
            .render_with(self.pattern(), |entry| self.text.representable(entry))
            .iter()
            .map(|row| self.text.encode(row))
            .collect()
    }

    /// Builds a serializable description of the current pattern.
    pub fn report(&self) -> PatternReport {
        let columns = self
            .pattern()
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnReport {
                index,
                width: column.highest_width(),
                clusters: column.highest_cluster_count(),
                entries: column.entries().map(str::to_string).collect(),
            })
            .collect();

        PatternReport {
            columns,
            rows: self.render(),
            greatest_common_chunk_index: self.greatest_common_chunk_index(),
            column_limit: self.column_limit(),
            ingested: self.filenames_ingested(),
            skipped: self.skipped.iter().map(SkippedFilename::display_name).collect(),
        }
    }
}

/// Structured form of a summary, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub columns: Vec<ColumnReport>,
    pub rows: Vec<String>,
    pub greatest_common_chunk_index: Option<usize>,
    pub column_limit: Option<usize>,
    pub ingested: usize,
    pub skipped: Vec<String>,
}

/// One column of a [`PatternReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    pub index: usize,
    /// Display width of the widest entry.
    pub width: usize,
    /// Grapheme cluster count of the longest entry.
    pub clusters: usize,
    /// Entries in ascending byte order.
    pub entries: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{Encoding, Replacement};

    fn strict_utf8() -> TextConfig {
        TextConfig::new(Encoding::Utf8).replacement(Replacement::Strict)
    }

    #[test]
    fn skips_malformed_and_continues() {
        let mut summarizer =
            Summarizer::new(DelimiterSet::parse("_")).with_text_config(strict_utf8());

        assert_eq!(summarizer.input_filename(b"a_1"), Ok(3));
        assert!(summarizer.input_filename(b"bad\xff_2").is_err());
        assert_eq!(summarizer.input_filename(b"b_2"), Ok(3));

        assert_eq!(summarizer.filenames_ingested(), 2);
        assert_eq!(summarizer.skipped().len(), 1);
        assert_eq!(summarizer.skipped()[0].display_name(), "bad\\xff_2");
        assert_eq!(summarizer.render(), ["a   1", "b _ 2"]);
    }

    #[test]
    fn skipped_filename_does_not_touch_common_index() {
        let mut summarizer =
            Summarizer::new(DelimiterSet::parse("_")).with_text_config(strict_utf8());
        summarizer.input_filename(b"a_b_c").unwrap();
        let _ = summarizer.input_filename(b"\xff");
        assert_eq!(summarizer.greatest_common_chunk_index(), Some(5));
    }

    #[test]
    fn display_name_escapes_control_characters() {
        let skipped = SkippedFilename {
            raw: b"tab\there".to_vec(),
            error: TextError::Malformed {
                encoding: Encoding::Ascii,
                offset: 0,
            },
        };
        assert_eq!(skipped.display_name(), "tab\\there");
    }

    #[test]
    fn display_name_keeps_quotes_and_backslashes() {
        let skipped = SkippedFilename {
            raw: b"it's \"a\\b\"\xff".to_vec(),
            error: TextError::Malformed {
                encoding: Encoding::Utf8,
                offset: 10,
            },
        };
        assert_eq!(skipped.display_name(), "it's \"a\\b\"\\xff");
    }

    #[test]
    fn input_str_normalizes() {
        let mut summarizer = Summarizer::new(DelimiterSet::new());
        summarizer.input_str("e\u{301}");
        summarizer.input_str("\u{e9}");
        let column = &summarizer.pattern().columns()[0];
        assert_eq!(column.len(), 1);
        assert!(column.contains("\u{e9}"));
    }

    #[test]
    fn render_encoded_uses_output_encoding() {
        let mut summarizer = Summarizer::new(DelimiterSet::parse("_"))
            .with_text_config(TextConfig::new(Encoding::Latin1));
        summarizer.input_filename(b"caf\xe9_1").unwrap();
        assert_eq!(summarizer.render(), ["caf\u{e9} _ 1"]);
        assert_eq!(summarizer.render_encoded(), [b"caf\xe9 _ 1".to_vec()]);
    }

    fn encoded_rows(names: &[&str], encoding: Encoding) -> Vec<Vec<u8>> {
        let mut summarizer = Summarizer::new(DelimiterSet::parse("_"))
            .with_text_config(TextConfig::new(encoding));
        for name in names {
            summarizer.input_str(name);
        }
        summarizer.render_encoded()
    }

    #[test]
    fn unrepresentable_wide_characters_stay_aligned() {
        for encoding in [Encoding::Ascii, Encoding::Latin1] {
            let rows = encoded_rows(&["\u{6f22}_1", "ab_22"], encoding);
            assert_eq!(rows, [b"ab   1 ".to_vec(), b"?  _ 22".to_vec()]);
        }
    }

    #[test]
    fn unrepresentable_combining_marks_stay_aligned() {
        // "g" + combining tilde has no precomposed form and writes as "g?"
        let rows = encoded_rows(&["g\u{303}_1", "a_22"], Encoding::Latin1);
        assert_eq!(rows, [b"a    1 ".to_vec(), b"g? _ 22".to_vec()]);

        let rows = encoded_rows(&["\u{6f22}_1", "g\u{303}_22", "ab_3"], Encoding::Ascii);
        assert!(rows.iter().all(|row| row.len() == rows[0].len()));
    }

    #[test]
    fn report_describes_columns() {
        let mut summarizer =
            Summarizer::new(DelimiterSet::parse("_")).with_column_limit(Some(80));
        summarizer.input_str("b_1");
        summarizer.input_str("a_22");

        let report = summarizer.report();
        assert_eq!(report.columns.len(), 3);
        assert_eq!(report.columns[0].entries, ["a", "b"]);
        assert_eq!(report.columns[2].width, 2);
        assert_eq!(report.columns[2].clusters, 2);
        assert_eq!(report.greatest_common_chunk_index, Some(3));
        assert_eq!(report.column_limit, Some(80));
        assert_eq!(report.ingested, 2);
        assert!(report.skipped.is_empty());
        assert_eq!(report.rows, summarizer.render());
    }
}
