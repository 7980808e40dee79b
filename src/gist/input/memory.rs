use super::InputSource;
use crate::error::{GistError, Result};
use std::collections::HashMap;
use std::io;

/// In-memory input for tests: a fixed stdin buffer, a map of file paths and
/// an optional clipboard value (`None` behaves like an unreachable clipboard).
#[derive(Debug, Default)]
pub struct MemoryInput {
    stdin: String,
    stdin_is_terminal: bool,
    files: HashMap<String, String>,
    clipboard: Option<String>,
    stdin_reads: usize,
    file_reads: Vec<String>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input whose stdin is an interactive terminal with nothing piped.
    pub fn terminal() -> Self {
        Self {
            stdin_is_terminal: true,
            ..Self::default()
        }
    }

    pub fn with_stdin(mut self, content: impl Into<String>) -> Self {
        self.stdin = content.into();
        self.stdin_is_terminal = false;
        self
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn with_clipboard(mut self, content: impl Into<String>) -> Self {
        self.clipboard = Some(content.into());
        self
    }

    pub fn stdin_reads(&self) -> usize {
        self.stdin_reads
    }

    /// Paths passed to `read_file`, in call order.
    pub fn file_reads(&self) -> &[String] {
        &self.file_reads
    }
}

impl InputSource for MemoryInput {
    fn stdin_is_terminal(&self) -> bool {
        self.stdin_is_terminal
    }

    fn read_stdin(&mut self) -> Result<String> {
        self.stdin_reads += 1;
        Ok(self.stdin.clone())
    }

    fn read_file(&mut self, path: &str) -> io::Result<String> {
        self.file_reads.push(path.to_string());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }

    fn read_clipboard(&self) -> Result<String> {
        self.clipboard
            .clone()
            .ok_or_else(|| GistError::ClipboardRead("clipboard unavailable".to_string()))
    }
}
