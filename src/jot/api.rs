//! # API Facade
//!
//! The single entry point for all jot operations, regardless of the UI
//! driving them. It dispatches to the command layer, normalizes inputs
//! (display positions become note ids here), and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation concerns — those live in `commands/*` and the binary
//! respectively.
//!
//! `JotApi<S: KvStore>` is generic over the storage backend:
//! `JotApi<FileKv>` in production, `JotApi<InMemoryKv>` in tests.

use crate::commands;
use crate::error::{JotError, Result};
use crate::index::resolve_positions;
use crate::model::{Note, NoteDraft, NotePatch};
use crate::store::notes::NoteStore;
use crate::store::KvStore;
use std::path::PathBuf;
use uuid::Uuid;

pub struct JotApi<S: KvStore> {
    store: NoteStore<S>,
    config_dir: PathBuf,
}

impl<S: KvStore> JotApi<S> {
    pub fn new(kv: S, config_dir: PathBuf) -> Self {
        Self {
            store: NoteStore::new(kv),
            config_dir,
        }
    }

    /// Pulls the persisted snapshot into memory. Called once at startup;
    /// a [`JotError::CorruptData`] failure leaves an empty collection
    /// behind, so the caller can warn and continue.
    pub fn load(&mut self) -> Result<()> {
        self.store.load()
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_notes(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_notes(&self, positions: &[usize]) -> Result<commands::CmdResult> {
        let ids = self.resolve(positions)?;
        commands::view::run(&self.store, &ids)
    }

    pub fn update_note(&mut self, position: usize, patch: NotePatch) -> Result<commands::CmdResult> {
        let ids = self.resolve(&[position])?;
        commands::update::run(&mut self.store, ids[0], patch)
    }

    pub fn delete_notes(&mut self, positions: &[usize]) -> Result<commands::CmdResult> {
        // Resolve every position up front; deleting shifts positions.
        let ids = self.resolve(positions)?;
        commands::delete::run(&mut self.store, &ids)
    }

    /// Fetches the note at a display position, for flows that need the
    /// current fields before acting (edit seeding, share).
    pub fn note_at(&self, position: usize) -> Result<Note> {
        let ids = self.resolve(&[position])?;
        self.store
            .get(&ids[0])
            .cloned()
            .ok_or_else(|| JotError::Api(format!("No note at position {}", position)))
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn resolve(&self, positions: &[usize]) -> Result<Vec<Uuid>> {
        Ok(resolve_positions(self.store.notes(), positions)?
            .into_iter()
            .map(|(_, id)| id)
            .collect())
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette;
    use crate::store::memory::InMemoryKv;

    fn api_with_notes(titles: &[&str]) -> JotApi<InMemoryKv> {
        let mut api = JotApi::new(InMemoryKv::new(), PathBuf::from("/nonexistent"));
        for title in titles {
            api.create_note(NoteDraft::new(*title, "body", palette::DEFAULT_COLOR))
                .unwrap();
        }
        api
    }

    #[test]
    fn positions_resolve_against_insertion_order() {
        let api = api_with_notes(&["one", "two", "three"]);
        assert_eq!(api.note_at(2).unwrap().title, "two");
        assert!(api.note_at(4).is_err());
    }

    #[test]
    fn delete_resolves_all_positions_before_mutating() {
        let mut api = api_with_notes(&["one", "two", "three"]);
        // Deleting 1 and 3 together must not be confused by the shift
        // after the first removal.
        api.delete_notes(&[1, 3]).unwrap();
        let titles: Vec<_> = api.notes().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["two"]);
    }

    #[test]
    fn update_by_position_dispatches_to_store() {
        let mut api = api_with_notes(&["one"]);
        api.update_note(
            1,
            NotePatch {
                color: Some(palette::BLUE.to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(api.notes()[0].color, palette::BLUE);
    }
}
