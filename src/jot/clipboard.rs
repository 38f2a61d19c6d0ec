use crate::error::{JotError, Result};

/// Copies text to the system clipboard, the closest CLI analog to a
/// platform share sheet.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        if pipe_to("xclip", &["-selection", "clipboard"], text).is_ok() {
            return Ok(());
        }
        pipe_to("xsel", &["--clipboard", "--input"], text)
            .map_err(|_| JotError::Api("No clipboard tool found. Install xclip or xsel.".to_string()))
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(JotError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| JotError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| JotError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| JotError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(JotError::Api(format!("{} exited with error", program)))
    }
}

/// Share text: title, blank line, content.
pub fn format_for_share(title: &str, content: &str) -> String {
    format!("{}\n\n{}", title, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_format_is_title_blank_line_content() {
        assert_eq!(
            format_for_share("Groceries", "milk\neggs"),
            "Groceries\n\nmilk\neggs"
        );
    }
}
