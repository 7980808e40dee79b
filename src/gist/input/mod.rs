//! # Input Layer
//!
//! Everything the assembler reads comes through the [`InputSource`] trait:
//! standard input, local files and the system clipboard, plus the one
//! question the mode resolver asks of the environment (is stdin a terminal).
//!
//! ## Implementations
//!
//! - [`system::SystemInput`]: the real process stdin, filesystem and OS clipboard
//! - [`memory::MemoryInput`]: canned values for tests, no process state touched

use crate::error::Result;

pub mod clipboard;
#[cfg(any(test, feature = "test_utils"))]
pub mod memory;
pub mod system;

pub trait InputSource {
    /// Whether standard input is attached to an interactive terminal.
    fn stdin_is_terminal(&self) -> bool;

    /// Read standard input until end of stream.
    fn read_stdin(&mut self) -> Result<String>;

    /// Read the file at `path` fully.
    fn read_file(&mut self, path: &str) -> std::io::Result<String>;

    /// Read the current clipboard text.
    fn read_clipboard(&self) -> Result<String>;
}
