//! Environment abstractions for testability.
//!
//! These traits abstract over OS interactions so tests can run without
//! depending on actual terminal state, stdin piping or environment variables.

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};

/// Abstraction over stdin reading.
pub trait StdinReader: Send + Sync {
    /// Check if stdin is a terminal (TTY).
    ///
    /// Returns `true` if stdin is interactive, `false` if piped.
    fn is_terminal(&self) -> bool;

    /// Read all bytes from stdin.
    ///
    /// Filenames need not be valid UTF-8, so this returns raw bytes. It
    /// should only be called if `is_terminal()` returns `false`.
    fn read_to_end(&self) -> io::Result<Vec<u8>>;
}

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

// === Real implementations ===

/// Real stdin reader using std::io.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

// === Mock implementations for testing ===

/// Mock stdin reader for testing.
///
/// Allows tests to simulate both terminal and piped stdin.
#[derive(Debug, Clone)]
pub struct MockStdin {
    is_terminal: bool,
    content: Vec<u8>,
}

impl MockStdin {
    /// Create a mock that simulates a terminal (no piped input).
    pub fn terminal() -> Self {
        Self {
            is_terminal: true,
            content: Vec::new(),
        }
    }

    /// Create a mock that simulates piped input.
    pub fn piped(content: impl Into<Vec<u8>>) -> Self {
        Self {
            is_terminal: false,
            content: content.into(),
        }
    }

    /// Create a mock that simulates empty piped input.
    pub fn piped_empty() -> Self {
        Self::piped(Vec::new())
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn read_to_end(&self) -> io::Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_stdin_terminal() {
        let stdin = MockStdin::terminal();
        assert!(stdin.is_terminal());
    }

    #[test]
    fn mock_stdin_piped_bytes() {
        let stdin = MockStdin::piped(b"a\xffb".to_vec());
        assert!(!stdin.is_terminal());
        assert_eq!(stdin.read_to_end().unwrap(), b"a\xffb");
    }

    #[test]
    fn mock_env_vars() {
        let env = MockEnv::new().with_var("LANG", "C");
        assert_eq!(env.var("LANG"), Some("C".to_string()));
        assert_eq!(env.var("LC_ALL"), None);
    }
}
