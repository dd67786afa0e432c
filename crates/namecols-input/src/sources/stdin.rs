//! Stdin filename-list source.

use crate::collector::{FilenameSource, Filenames, SourceKind};
use crate::env::{RealStdin, StdinReader};
use crate::InputError;

/// Collect filenames from piped stdin, one per line.
///
/// This source reads from stdin only when it is piped (not a terminal). If
/// stdin is a TTY, the source returns `None` to let the chain continue.
/// Blank lines are ignored and a trailing `\r` is stripped from each line.
///
/// # Testing
///
/// Use [`StdinSource::with_reader`] to inject a mock:
///
/// ```
/// use namecols_input::{FilenameSource, MockStdin, StdinSource};
///
/// let source = StdinSource::with_reader(MockStdin::piped("a.txt\r\n\nb.txt"));
/// let names = source.collect().unwrap().unwrap();
/// assert_eq!(names, vec![b"a.txt".to_vec(), b"b.txt".to_vec()]);
/// ```
#[derive(Debug, Clone)]
pub struct StdinSource<R: StdinReader = RealStdin> {
    reader: R,
}

impl StdinSource<RealStdin> {
    /// Create a new stdin source using real stdin.
    pub fn new() -> Self {
        Self { reader: RealStdin }
    }
}

impl Default for StdinSource<RealStdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: StdinReader> StdinSource<R> {
    /// Create a stdin source with a custom reader.
    ///
    /// This is primarily used for testing to inject mock stdin.
    pub fn with_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: StdinReader> FilenameSource for StdinSource<R> {
    fn name(&self) -> &'static str {
        "stdin"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Stdin
    }

    fn is_available(&self) -> bool {
        !self.reader.is_terminal()
    }

    fn collect(&self) -> Result<Option<Filenames>, InputError> {
        if self.reader.is_terminal() {
            return Ok(None);
        }

        let content = self.reader.read_to_end().map_err(InputError::StdinFailed)?;
        Ok(Some(split_lines(&content)))
    }
}

/// Splits a newline-separated filename list.
pub fn split_lines(content: &[u8]) -> Filenames {
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}
