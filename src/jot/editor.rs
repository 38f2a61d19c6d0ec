use crate::error::{JotError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// The add/edit form, CLI-style: a buffer whose first line is the title
/// and whose remainder (after a blank separator) is the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub content: String,
}

impl EditorContent {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    pub fn to_buffer(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.content)
        }
    }

    /// First line is the title; leading blank lines of the remainder are
    /// the separator, everything after is content.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or("").trim().to_string();
        let body: Vec<&str> = lines.skip_while(|l| l.trim().is_empty()).collect();
        Self {
            title,
            content: body.join("\n").trim_end().to_string(),
        }
    }
}

/// Picks an editor: $EDITOR, then $VISUAL, then common fallbacks.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(JotError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits, and returns the edited
/// file contents.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| JotError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(JotError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(JotError::Io)
}

/// Round-trips content through the user's editor via a temp file.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join("jot_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(JotError::Io)?;
    let result = open_in_editor(&temp_file)?;
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_buffer_with_content() {
        let ec = EditorContent::new("My Title".to_string(), "Some content here.".to_string());
        assert_eq!(ec.to_buffer(), "My Title\n\nSome content here.");
    }

    #[test]
    fn to_buffer_empty_content() {
        let ec = EditorContent::new("My Title".to_string(), String::new());
        assert_eq!(ec.to_buffer(), "My Title\n\n");
    }

    #[test]
    fn from_buffer_normal() {
        let ec = EditorContent::from_buffer("My Title\n\nThis is content.\nMore content.");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "This is content.\nMore content.");
    }

    #[test]
    fn from_buffer_title_only() {
        let ec = EditorContent::from_buffer("My Title");
        assert_eq!(ec.title, "My Title");
        assert_eq!(ec.content, "");
    }

    #[test]
    fn from_buffer_empty() {
        let ec = EditorContent::from_buffer("");
        assert_eq!(ec.title, "");
        assert_eq!(ec.content, "");
    }

    #[test]
    fn from_buffer_without_blank_separator() {
        let ec = EditorContent::from_buffer("Title\nContent without blank");
        assert_eq!(ec.title, "Title");
        assert_eq!(ec.content, "Content without blank");
    }

    #[test]
    fn buffer_roundtrip() {
        let original = EditorContent::new(
            "Test Title".to_string(),
            "Test content\nwith lines".to_string(),
        );
        assert_eq!(EditorContent::from_buffer(&original.to_buffer()), original);
    }
}
