//! Turns the resolved input mode into the ordered list of files to upload.
//!
//! Each mode yields one [`NamedContent`] per input item. Override names are
//! applied by position and may never outnumber the items: stdin and the
//! clipboard produce exactly one item, globs one per path.

use super::mode::InputMode;
use super::{CmdMessage, CmdResult};
use crate::error::{GistError, Result};
use crate::input::InputSource;
use crate::model::{NamedContent, OverrideNames, DEFAULT_FILE_NAME};
use std::collections::HashSet;

pub fn run<I: AsRef<str>, S: InputSource>(
    input: &mut S,
    mode: InputMode,
    paths: &[I],
    names: &OverrideNames,
    token: &str,
) -> Result<CmdResult> {
    let mut result = match mode {
        InputMode::Stdin => from_stdin(input, names)?,
        InputMode::Clipboard => from_clipboard(input, names, token)?,
        InputMode::Globs => from_globs(input, paths, names)?,
        InputMode::Error => return Err(GistError::NoInputData),
    };
    warn_duplicate_names(&mut result);
    Ok(result)
}

/// Reads stdin to end of stream and uploads it as a single file.
pub fn from_stdin<S: InputSource>(input: &mut S, names: &OverrideNames) -> Result<CmdResult> {
    check_override_count(names, 1)?;
    let name = names.get(0).unwrap_or(DEFAULT_FILE_NAME).to_string();

    let raw = input.read_stdin()?;
    let content = raw.lines().collect::<Vec<_>>().join("\n");

    Ok(single("stdin", NamedContent::new(name, content)))
}

/// Reads the clipboard and uploads it as a single file, refusing to upload
/// the API token itself.
pub fn from_clipboard<S: InputSource>(
    input: &mut S,
    names: &OverrideNames,
    token: &str,
) -> Result<CmdResult> {
    check_override_count(names, 1)?;
    let name = names.get(0).unwrap_or(DEFAULT_FILE_NAME).to_string();

    let content = input.read_clipboard()?;
    if !token.is_empty() && content == token {
        return Err(GistError::TokenInClipboard);
    }

    Ok(single("clipboard", NamedContent::new(name, content)))
}

/// Reads every path in order. The first unreadable path aborts the whole
/// assembly.
pub fn from_globs<I: AsRef<str>, S: InputSource>(
    input: &mut S,
    paths: &[I],
    names: &OverrideNames,
) -> Result<CmdResult> {
    check_override_count(names, paths.len())?;

    let mut result = CmdResult::default();
    let mut files = Vec::with_capacity(paths.len());

    for (position, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let content = input.read_file(path).map_err(|source| GistError::FileRead {
            path: path.to_string(),
            source,
        })?;

        let name = names
            .get(position)
            .unwrap_or_else(|| default_name(path))
            .to_string();

        result.add_message(uploading_message(path, &name));
        files.push(NamedContent::new(name, content));
    }

    Ok(result.with_files(files))
}

/// Final path segment of `path`: `dir/sub/file.txt` uploads as `file.txt`.
pub fn default_name(path: &str) -> &str {
    path.rsplit(std::path::is_separator).next().unwrap_or(path)
}

fn check_override_count(names: &OverrideNames, inputs: usize) -> Result<()> {
    if names.len() > inputs {
        return Err(GistError::TooManyOverrideNames {
            names: names.len(),
            inputs,
        });
    }
    Ok(())
}

fn single(source: &str, file: NamedContent) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(uploading_message(source, &file.name));
    result.with_files(vec![file])
}

fn uploading_message(source: &str, name: &str) -> CmdMessage {
    CmdMessage::info(format!("Uploading {} as {}", source, name))
}

// Later files replace earlier ones with the same name in the payload.
fn warn_duplicate_names(result: &mut CmdResult) {
    let duplicates: Vec<String> = {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        result
            .files
            .iter()
            .map(|file| file.name.as_str())
            .filter(|name| !seen.insert(*name) && reported.insert(*name))
            .map(str::to_string)
            .collect()
    };

    for name in duplicates {
        tracing::debug!(name = %name, "duplicate gist file name");
        result.add_message(CmdMessage::warning(format!(
            "{} appears more than once; only the last one is uploaded",
            name
        )));
    }
}
