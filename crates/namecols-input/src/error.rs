//! Error types for filename collection.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while collecting filenames.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The directory argument does not name a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The directory could not be opened or listed.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Walking the directory tree failed at its root.
    #[error("cannot walk directory: {0}")]
    WalkFailed(#[source] walkdir::Error),

    /// Failed to read from stdin.
    #[error("failed to read stdin: {0}")]
    StdinFailed(#[source] io::Error),

    /// No directory was given and stdin is an interactive terminal.
    #[error("no directory given and no filenames piped on stdin")]
    NoInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_directory_names_path() {
        let err = InputError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(err.to_string(), "/tmp/file.txt is not a directory");
    }

    #[test]
    fn directory_failed_keeps_source() {
        let err = InputError::DirectoryFailed {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
