use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed accent color palette. Notes carry the hex token; the names
/// exist only for ergonomics at the input boundary.
pub mod palette {
    pub const PINK: &str = "#FFD3E0";
    pub const ORANGE: &str = "#FFE0B2";
    pub const YELLOW: &str = "#FFF9C4";
    pub const GREEN: &str = "#DCEDC8";
    pub const BLUE: &str = "#B3E5FC";
    pub const PURPLE: &str = "#D1C4E9";
    pub const GRAY: &str = "#F5F5F5";

    pub const DEFAULT_COLOR: &str = GRAY;

    pub const COLORS: [(&str, &str); 7] = [
        ("pink", PINK),
        ("orange", ORANGE),
        ("yellow", YELLOW),
        ("green", GREEN),
        ("blue", BLUE),
        ("purple", PURPLE),
        ("gray", GRAY),
    ];

    /// Resolves user input (a palette name or a palette hex token, any
    /// case) to the canonical hex token. Returns `None` for anything
    /// outside the palette.
    pub fn resolve(input: &str) -> Option<&'static str> {
        let lowered = input.to_lowercase();
        COLORS
            .iter()
            .find(|(name, hex)| *name == lowered || hex.to_lowercase() == lowered)
            .map(|(_, hex)| *hex)
    }
}

/// A single user-authored note. Field names on the wire follow the
/// snapshot contract: `createdAt`, `updatedAt` (omitted until the first
/// update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(draft: NoteDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            color: draft.color,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Merges the present patch fields onto the note and stamps
    /// `updated_at`. Fields absent from the patch are untouched.
    pub fn apply(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        self.updated_at = Some(Utc::now());
    }
}

/// Unsaved title/content/color input prior to becoming a persisted note.
/// Non-empty title and content are enforced at the form boundary, not
/// here.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub color: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            color: color.into(),
        }
    }
}

/// A partial update; only present fields are merged.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.color.is_none()
    }
}
