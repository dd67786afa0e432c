//! Source chain for falling back between filename sources.

use tracing::debug;

use crate::collector::{FilenameSource, ResolvedFilenames};
use crate::InputError;

/// Chain multiple filename sources with fallback behavior.
///
/// Sources are tried in the order they were added. The first available
/// source that returns `Some(filenames)` wins. If none does, resolution fails
/// with [`InputError::NoInput`].
///
/// # Example
///
/// ```
/// use namecols_input::{MockStdin, SourceChain, SourceKind, StdinSource};
///
/// let resolved = SourceChain::new()
///     .try_source(StdinSource::with_reader(MockStdin::piped("a.txt\nb.txt\n")))
///     .resolve()
///     .unwrap();
///
/// assert_eq!(resolved.source, SourceKind::Stdin);
/// assert_eq!(resolved.filenames, vec![b"a.txt".to_vec(), b"b.txt".to_vec()]);
/// ```
#[derive(Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn FilenameSource>>,
}

impl SourceChain {
    /// Create a new empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source to the chain.
    pub fn try_source<S: FilenameSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Add a source only if one is given.
    pub fn try_optional<S: FilenameSource + 'static>(self, source: Option<S>) -> Self {
        match source {
            Some(source) => self.try_source(source),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve the chain, returning the first source's filenames.
    pub fn resolve(&self) -> Result<ResolvedFilenames, InputError> {
        for source in &self.sources {
            if !source.is_available() {
                debug!(source = source.name(), "source unavailable");
                continue;
            }
            if let Some(filenames) = source.collect()? {
                debug!(
                    source = source.name(),
                    count = filenames.len(),
                    "collected filenames"
                );
                return Ok(ResolvedFilenames {
                    filenames,
                    source: source.kind(),
                });
            }
        }
        Err(InputError::NoInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Filenames, SourceKind};
    use crate::env::MockStdin;
    use crate::sources::StdinSource;

    struct Fixed(Option<Filenames>);

    impl FilenameSource for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn kind(&self) -> SourceKind {
            SourceKind::Directory
        }

        fn is_available(&self) -> bool {
            true
        }

        fn collect(&self) -> Result<Option<Filenames>, InputError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn empty_chain_has_no_input() {
        let chain = SourceChain::new();
        assert!(chain.is_empty());
        assert!(matches!(chain.resolve(), Err(InputError::NoInput)));
    }

    #[test]
    fn first_source_wins() {
        let resolved = SourceChain::new()
            .try_source(Fixed(Some(vec![b"dir".to_vec()])))
            .try_source(StdinSource::with_reader(MockStdin::piped("stdin")))
            .resolve()
            .unwrap();
        assert_eq!(resolved.source, SourceKind::Directory);
        assert_eq!(resolved.filenames, vec![b"dir".to_vec()]);
    }

    #[test]
    fn falls_through_none() {
        let resolved = SourceChain::new()
            .try_source(Fixed(None))
            .try_source(StdinSource::with_reader(MockStdin::piped("x")))
            .resolve()
            .unwrap();
        assert_eq!(resolved.source, SourceKind::Stdin);
    }

    #[test]
    fn terminal_stdin_is_no_input() {
        let chain = SourceChain::new()
            .try_optional(None::<Fixed>)
            .try_source(StdinSource::with_reader(MockStdin::terminal()));
        assert_eq!(chain.len(), 1);
        assert!(matches!(chain.resolve(), Err(InputError::NoInput)));
    }
}
