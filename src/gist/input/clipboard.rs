use crate::error::{GistError, Result};
use std::process::{Command, Output};

/// Reads the system clipboard as text, shelling out to the platform tool.
/// - macOS: pbpaste
/// - Linux: wl-paste, then xclip, then xsel
/// - Windows: powershell Get-Clipboard
pub fn get_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        paste_macos()
    }

    #[cfg(target_os = "linux")]
    {
        paste_linux()
    }

    #[cfg(target_os = "windows")]
    {
        paste_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(GistError::ClipboardRead(
            "clipboard not supported on this platform".to_string(),
        ))
    }
}

fn decode(tool: &str, output: Output) -> Result<String> {
    if !output.status.success() {
        return Err(GistError::ClipboardRead(format!("{} exited with error", tool)));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| GistError::ClipboardRead(format!("invalid UTF-8 in clipboard: {}", e)))
}

#[cfg(target_os = "macos")]
fn paste_macos() -> Result<String> {
    let output = Command::new("pbpaste")
        .output()
        .map_err(|e| GistError::ClipboardRead(format!("failed to execute pbpaste: {}", e)))?;
    decode("pbpaste", output)
}

#[cfg(target_os = "linux")]
fn paste_linux() -> Result<String> {
    // First tool that runs successfully wins
    let candidates: [(&str, &[&str]); 3] = [
        ("wl-paste", &["--no-newline"]),
        ("xclip", &["-selection", "clipboard", "-o"]),
        ("xsel", &["--clipboard", "--output"]),
    ];

    for (tool, args) in candidates {
        match Command::new(tool).args(args).output() {
            Ok(output) if output.status.success() => return decode(tool, output),
            Ok(_) => tracing::debug!(tool, "clipboard tool exited with error"),
            Err(e) => tracing::debug!(tool, error = %e, "clipboard tool unavailable"),
        }
    }

    Err(GistError::ClipboardRead(
        "failed to run wl-paste, xclip or xsel. Install one of them.".to_string(),
    ))
}

// Console output defaults to the OEM code page; switch it to UTF-8 first.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
const POWERSHELL_PASTE: &str =
    "[Console]::OutputEncoding = [System.Text.Encoding]::UTF8; Get-Clipboard -Raw";

#[cfg(target_os = "windows")]
fn paste_windows() -> Result<String> {
    let output = Command::new("powershell")
        .args(["-NoProfile", "-Command", POWERSHELL_PASTE])
        .output()
        .map_err(|e| GistError::ClipboardRead(format!("failed to execute powershell: {}", e)))?;
    // Get-Clipboard appends a line terminator
    decode("powershell", output).map(|text| {
        text.strip_suffix("\r\n")
            .map(str::to_string)
            .unwrap_or(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn decode_rejects_failed_status() {
        let output = Command::new("false").output().unwrap();
        let err = decode("false", output).unwrap_err();
        assert!(matches!(err, GistError::ClipboardRead(msg) if msg.contains("false")));
    }

    #[cfg(unix)]
    #[test]
    fn decode_returns_stdout_verbatim() {
        let output = Command::new("printf").arg("secret\\n").output().unwrap();
        assert_eq!(decode("printf", output).unwrap(), "secret\n");
    }

    #[test]
    fn powershell_switches_output_to_utf8_before_reading() {
        let (encoding, read) = POWERSHELL_PASTE.split_once(';').unwrap();
        assert!(encoding.contains("[Console]::OutputEncoding"));
        assert!(encoding.ends_with("UTF8"));
        assert_eq!(read.trim(), "Get-Clipboard -Raw");
    }
}
