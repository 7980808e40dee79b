use super::clipboard::get_from_clipboard;
use super::InputSource;
use crate::error::{GistError, Result};
use std::io::{IsTerminal, Read};

/// Reads from the running process: its stdin, the local filesystem and the
/// OS clipboard.
#[derive(Debug, Default)]
pub struct SystemInput;

impl SystemInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for SystemInput {
    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_stdin(&mut self) -> Result<String> {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map_err(GistError::StdinRead)?;
        Ok(decode_lossy(buffer))
    }

    fn read_file(&mut self, path: &str) -> std::io::Result<String> {
        std::fs::read(path).map(decode_lossy)
    }

    fn read_clipboard(&self) -> Result<String> {
        get_from_clipboard()
    }
}

// Invalid UTF-8 sequences become U+FFFD instead of failing the upload.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
