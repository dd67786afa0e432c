//! The end-to-end pipeline: collect filenames, summarize, write.

use std::io::{self, Write};

use namecols_engine::Summarizer;
use namecols_input::{
    DirectorySource, InputError, SourceChain, SourceKind, StdinReader, StdinSource,
};
use tracing::info;

use crate::config::Config;
use crate::output::{write_skipped, write_summary};

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Filenames could not be collected.
    #[error(transparent)]
    Input(#[from] InputError),

    /// Writing the summary failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    /// True when no filename source was usable, which is a usage error.
    pub fn is_no_input(&self) -> bool {
        matches!(self, RunError::Input(InputError::NoInput))
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: SourceKind,
    /// Filenames collected from the source.
    pub collected: usize,
    /// Filenames that made it into the pattern.
    pub ingested: usize,
    /// Filenames skipped as undecodable.
    pub skipped: usize,
    pub columns: usize,
}

/// Runs one summary.
///
/// The directory in `config` is used when present; otherwise filenames come
/// from `stdin`. The table (or JSON report) goes to `out`; the list of
/// skipped filenames goes to `err` unless `config.quiet` is set.
///
/// # Errors
///
/// Fails when no source is usable, when the directory or stdin can't be
/// read, or when writing fails. Undecodable filenames are not errors.
pub fn run<R>(
    config: &Config,
    stdin: StdinSource<R>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RunSummary, RunError>
where
    R: StdinReader + 'static,
{
    let directory = config
        .directory
        .as_ref()
        .map(|dir| DirectorySource::new(dir).recursive(config.recursive));

    let resolved = SourceChain::new()
        .try_optional(directory)
        .try_source(stdin)
        .resolve()?;

    let mut summarizer = Summarizer::new(config.delimiters.clone())
        .with_text_config(config.text)
        .with_column_limit(config.column_limit);

    for filename in &resolved.filenames {
        // failures are recorded on the summarizer
        let _ = summarizer.input_filename(filename);
    }

    let summary = RunSummary {
        source: resolved.source,
        collected: resolved.filenames.len(),
        ingested: summarizer.filenames_ingested(),
        skipped: summarizer.skipped().len(),
        columns: summarizer.pattern().len(),
    };
    info!(
        source = ?summary.source,
        ingested = summary.ingested,
        skipped = summary.skipped,
        columns = summary.columns,
        "summarized filenames"
    );

    write_summary(&summarizer, config.output, out)?;
    out.flush()?;
    if !config.quiet {
        write_skipped(summarizer.skipped(), err)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::default_directive;
    use crate::output::OutputMode;
    use namecols_engine::{DelimiterSet, Encoding, Replacement, TextConfig};
    use namecols_input::MockStdin;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::EnvFilter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    // Runs with a log subscriber at the filter `-v` count `verbose` selects.
    fn run_logged(config: &Config, input: &[u8], verbose: u8) -> (String, String) {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(default_directive(verbose, false)))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        let mut err = Vec::new();
        tracing::subscriber::with_default(subscriber, || {
            let stdin = StdinSource::with_reader(MockStdin::piped(input.to_vec()));
            run(config, stdin, &mut io::sink(), &mut err).unwrap();
        });
        (logs.text(), String::from_utf8(err).unwrap())
    }

    fn config(delimiters: &str) -> Config {
        Config {
            directory: None,
            recursive: false,
            delimiters: DelimiterSet::parse(delimiters),
            text: TextConfig::default(),
            column_limit: None,
            output: OutputMode::Text,
            quiet: false,
        }
    }

    #[test]
    fn reads_stdin_when_no_directory() {
        let stdin = StdinSource::with_reader(MockStdin::piped("a,b,\nc\n"));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let summary = run(&config(","), stdin, &mut out, &mut err).unwrap();

        assert_eq!(summary.source, SourceKind::Stdin);
        assert_eq!(summary.ingested, 2);
        assert_eq!(summary.columns, 4);
        assert_eq!(String::from_utf8(out).unwrap(), "a      \nc , b ,\n");
        assert!(err.is_empty());
    }

    #[test]
    fn terminal_stdin_without_directory_is_no_input() {
        let stdin = StdinSource::with_reader(MockStdin::terminal());
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let result = run(&config("_"), stdin, &mut out, &mut err);
        assert!(result.unwrap_err().is_no_input());
        assert!(out.is_empty());
    }

    #[test]
    fn skipped_filenames_are_reported_unless_quiet() {
        let mut config = config("_");
        config.text = TextConfig::new(Encoding::Utf8).replacement(Replacement::Strict);

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let stdin = StdinSource::with_reader(MockStdin::piped(b"ok_1\nbad\xff\n".to_vec()));
        let summary = run(&config, stdin, &mut out, &mut err).unwrap();
        assert_eq!(summary.collected, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "ok _ 1\n");
        assert!(String::from_utf8(err).unwrap().contains("bad\\xff"));

        config.quiet = true;
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let stdin = StdinSource::with_reader(MockStdin::piped(b"ok_1\nbad\xff\n".to_vec()));
        run(&config, stdin, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn output_is_reencoded() {
        let mut config = config("_");
        config.text = TextConfig::new(Encoding::Latin1);

        let (mut out, mut err) = (Vec::new(), Vec::new());
        let stdin = StdinSource::with_reader(MockStdin::piped(b"caf\xe9_1\n".to_vec()));
        run(&config, stdin, &mut out, &mut err).unwrap();
        assert_eq!(out, b"caf\xe9 _ 1\n");
    }

    #[test]
    fn skipped_filename_is_reported_once_by_default() {
        let mut config = config("_");
        config.text = TextConfig::new(Encoding::Utf8).replacement(Replacement::Strict);
        let input = b"ok_1\nbad\xff\n";

        let (logs, err) = run_logged(&config, input, 0);
        assert!(!logs.contains("bad"));
        assert_eq!(err.matches("bad\\xff").count(), 1);

        let (logs, _) = run_logged(&config, input, 1);
        assert!(logs.contains("skipping filename"));
    }
}
