//! The set of grapheme clusters that split filenames into tokens.

use std::collections::BTreeSet;

use crate::text::{grapheme_indices, normalize};

/// A set of delimiter grapheme clusters.
///
/// Every user-perceived character of the delimiter string is an
/// independent delimiter. The empty set is a sentinel: it means every grapheme
/// cluster splits, so each character of a filename becomes its own token.
///
/// ```rust
/// use namecols_engine::DelimiterSet;
///
/// let delimiters = DelimiterSet::parse("_.");
/// assert!(delimiters.matches("_"));
/// assert!(!delimiters.matches("a"));
///
/// let everything = DelimiterSet::parse("");
/// assert!(everything.splits_every_cluster());
/// assert!(everything.matches("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterSet {
    clusters: BTreeSet<String>,
}

impl DelimiterSet {
    /// The empty set, which splits on every grapheme cluster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a delimiter string.
    ///
    /// The string is NFC-normalized first so delimiters compare equal to the
    /// normalized filenames they are matched against. Repeated characters
    /// collapse into one entry.
    pub fn parse(chars: &str) -> Self {
        let normalized = normalize(chars);
        let clusters = grapheme_indices(&normalized)
            .map(|(_, cluster)| cluster.to_string())
            .collect();
        Self { clusters }
    }

    /// Returns true if `cluster` is a delimiter.
    ///
    /// Always true for the empty set.
    pub fn matches(&self, cluster: &str) -> bool {
        self.clusters.is_empty() || self.clusters.contains(cluster)
    }

    /// Returns true if this is the "split everything" sentinel.
    pub fn splits_every_cluster(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Delimiters in byte order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.clusters.iter().map(String::as_str)
    }
}

impl From<&str> for DelimiterSet {
    fn from(chars: &str) -> Self {
        Self::parse(chars)
    }
}
