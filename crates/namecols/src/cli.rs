//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use namecols_engine::Encoding;

use crate::output::OutputMode;

/// Show the naming pattern shared by a set of filenames.
///
/// Every filename is split into tokens at the delimiter characters; the Nth
/// token of every filename lands in column N. Each column lists the distinct
/// tokens found at that position.
#[derive(Debug, Clone, Parser)]
#[command(name = "namecols", version)]
pub struct Cli {
    /// Directory whose entries to summarize.
    ///
    /// When omitted, filenames are read from stdin, one per line.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Characters that split filenames.
    ///
    /// Each user-perceived character is a separate delimiter. When empty,
    /// every character is split apart.
    #[arg(
        short,
        long,
        value_name = "CHARS",
        env = "NAMECOLS_DELIMITERS",
        default_value = "",
        hide_default_value = true
    )]
    pub delimiters: String,

    /// Include entries of subdirectories.
    #[arg(short, long)]
    pub recursive: bool,

    /// Terminal width hint (defaults to the detected width; not used for wrapping).
    #[arg(short, long, value_name = "COLS", env = "NAMECOLS_WIDTH")]
    pub width: Option<usize>,

    /// Encoding of filenames and output (UTF-8, ISO-8859-1, ASCII).
    ///
    /// Defaults to the codeset of LC_ALL, LC_CTYPE or LANG, then UTF-8.
    #[arg(long, value_name = "LABEL", env = "NAMECOLS_ENCODING")]
    pub encoding: Option<Encoding>,

    /// Skip filenames that are invalid in the encoding instead of
    /// substituting U+FFFD.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors and don't list skipped filenames.
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "namecols",
            "-d",
            "_.",
            "-r",
            "-w",
            "100",
            "--encoding",
            "latin1",
            "--strict",
            "-o",
            "json",
            "-vv",
            "some/dir",
        ])
        .unwrap();

        assert_eq!(cli.directory, Some(PathBuf::from("some/dir")));
        assert_eq!(cli.delimiters, "_.");
        assert!(cli.recursive);
        assert_eq!(cli.width, Some(100));
        assert_eq!(cli.encoding, Some(Encoding::Latin1));
        assert!(cli.strict);
        assert_eq!(cli.output, OutputMode::Json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn empty_delimiters_are_accepted() {
        let cli = Cli::try_parse_from(["namecols", "-d", ""]).unwrap();
        assert_eq!(cli.delimiters, "");
        assert_eq!(cli.directory, None);
    }

    #[test]
    fn unknown_encoding_is_rejected() {
        let err = Cli::try_parse_from(["namecols", "--encoding", "klingon"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["namecols", "-v", "-q"]).is_err());
    }
}
