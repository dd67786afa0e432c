//! Directory listing source.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::collector::{FilenameSource, Filenames, SourceKind};
use crate::InputError;

/// Collect the names of a directory's entries.
///
/// Only the final path component of each entry is reported; `.` and `..`
/// never appear. Entries come back in the order the filesystem lists them.
/// With [`recursive`](Self::recursive), entries of every subdirectory are
/// included as well (subdirectories themselves are entries too).
///
/// An unreadable root is an error. Unreadable subdirectories met during a
/// recursive walk are logged and skipped.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    recursive: bool,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
        }
    }

    /// Descend into subdirectories.
    ///
    /// Default is `false`.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FilenameSource for DirectorySource {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Directory
    }

    fn is_available(&self) -> bool {
        true
    }

    fn collect(&self) -> Result<Option<Filenames>, InputError> {
        let metadata = fs::metadata(&self.root).map_err(|source| InputError::DirectoryFailed {
            path: self.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(InputError::NotADirectory(self.root.clone()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(&self.root).min_depth(1).max_depth(max_depth);

        let mut filenames = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => filenames.push(entry.file_name().as_encoded_bytes().to_vec()),
                Err(err) if err.depth() == 0 => return Err(InputError::WalkFailed(err)),
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                }
            }
        }
        Ok(Some(filenames))
    }
}
