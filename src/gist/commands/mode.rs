use crate::input::InputSource;

/// Where the content of one invocation comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Stdin,
    Globs,
    Clipboard,
    /// Nothing to upload: no paths, no clipboard flag, stdin is a terminal.
    Error,
}

/// Picks the input mode from the positional paths and the clipboard flag.
///
/// The clipboard flag always wins and the paths are ignored. Without paths,
/// piped/redirected stdin means [`InputMode::Stdin`]; an interactive terminal
/// means there is nothing to read.
pub fn resolve<I: AsRef<str>, S: InputSource>(
    paths: &[I],
    clipboard: bool,
    input: &S,
) -> InputMode {
    if clipboard {
        return InputMode::Clipboard;
    }
    if paths.is_empty() {
        if input.stdin_is_terminal() {
            return InputMode::Error;
        }
        return InputMode::Stdin;
    }
    InputMode::Globs
}
