use crate::config::JotConfig;
use crate::error::JotError;
use crate::index::DisplayNote;
use crate::model::Note;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub config: Option<JotConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: JotConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Records a failed mirror write as a warning. The in-memory change
    /// already happened, so the session continues; only the durable
    /// snapshot is stale.
    pub(crate) fn note_persist_failure(&mut self, err: &JotError) {
        self.add_message(CmdMessage::warning(format!(
            "{} (your change is kept for this session)",
            err
        )));
    }
}
