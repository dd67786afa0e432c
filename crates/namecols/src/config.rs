//! Resolved runtime configuration.
//!
//! [`Config`] is everything a run needs, resolved once from the command line,
//! the environment and the terminal. Encodings are explicit values here; no
//! process-wide locale state is consulted after this point.

use std::path::PathBuf;

use namecols_engine::{DelimiterSet, Encoding, Replacement, TextConfig};
use namecols_input::EnvReader;

use crate::cli::Cli;
use crate::output::OutputMode;

/// Locale variables consulted for the default encoding, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to list, or `None` to read stdin.
    pub directory: Option<PathBuf>,
    pub recursive: bool,
    pub delimiters: DelimiterSet,
    pub text: TextConfig,
    /// Terminal width hint, carried but never applied.
    pub column_limit: Option<usize>,
    pub output: OutputMode,
    /// Suppress the skipped-filename summary.
    pub quiet: bool,
}

impl Config {
    /// Resolves a configuration.
    ///
    /// `terminal_width` is the detected width, used when `--width` is absent.
    pub fn from_cli(cli: &Cli, env: &dyn EnvReader, terminal_width: Option<usize>) -> Self {
        let encoding = cli.encoding.unwrap_or_else(|| locale_encoding(env));
        let replacement = if cli.strict {
            Replacement::Strict
        } else {
            Replacement::Substitute
        };

        Self {
            directory: cli.directory.clone(),
            recursive: cli.recursive,
            delimiters: DelimiterSet::parse(&cli.delimiters),
            text: TextConfig::new(encoding).replacement(replacement),
            column_limit: cli.width.or(terminal_width),
            output: cli.output,
            quiet: cli.quiet,
        }
    }
}

/// The encoding named by the locale environment, UTF-8 if none is usable.
///
/// The first non-empty variable of `LC_ALL`, `LC_CTYPE`, `LANG` decides, as
/// with `setlocale(LC_CTYPE, "")`.
pub fn locale_encoding(env: &dyn EnvReader) -> Encoding {
    LOCALE_VARS
        .iter()
        .filter_map(|name| env.var(name))
        .find(|value| !value.is_empty())
        .and_then(|locale| Encoding::from_locale(&locale))
        .unwrap_or_default()
}

/// Gets the current terminal width, or None if not available.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
