//! Output mode control.
//!
//! [`OutputMode`] is the user-facing enum for the `--output` flag. Text mode
//! writes the table re-encoded to the output encoding; JSON mode serializes
//! the [`PatternReport`](namecols_engine::PatternReport) and is always UTF-8.

use std::io::{self, Write};

use clap::ValueEnum;
use namecols_engine::{SkippedFilename, Summarizer};

/// Controls how the summary is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// The aligned table, one row per line
    #[default]
    Text,
    /// A JSON report with columns, rows and run statistics
    Json,
}

/// Writes the summary to `out` in the given mode.
pub fn write_summary(
    summarizer: &Summarizer,
    mode: OutputMode,
    out: &mut dyn Write,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            for row in summarizer.render_encoded() {
                out.write_all(&row)?;
                out.write_all(b"\n")?;
            }
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, &summarizer.report())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Lists filenames that could not be processed. Writes nothing if there are none.
pub fn write_skipped(skipped: &[SkippedFilename], err: &mut dyn Write) -> io::Result<()> {
    if skipped.is_empty() {
        return Ok(());
    }
    writeln!(err, "these filenames could not be processed:")?;
    for filename in skipped {
        writeln!(err, "  {}", filename.display_name())?;
    }
    Ok(())
}
