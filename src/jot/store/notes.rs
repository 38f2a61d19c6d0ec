//! The canonical note collection and its durable mirror.
//!
//! [`NoteStore`] owns the in-memory `Vec<Note>` — the single source of
//! truth while the process runs — and writes the whole collection to the
//! backing [`KvStore`] after every mutation. The mirror is best-effort:
//! a failed write leaves memory and disk diverged until the next
//! successful write, and the next mutation re-attempts with the newer
//! state. There is no retry queue and no rollback.
//!
//! Mutations therefore return a pair: the in-memory outcome (which never
//! fails) and the persist outcome (which the caller may log or ignore).

use super::KvStore;
use crate::error::{JotError, Result};
use crate::model::{Note, NoteDraft, NotePatch};
use uuid::Uuid;

/// The single fixed key the serialized collection lives under.
pub const NOTES_KEY: &str = "notes";

/// Outcome of mirroring the collection after a mutation. `Err` means the
/// durable snapshot is stale; the in-memory change already happened.
pub type PersistOutcome = Result<()>;

pub struct NoteStore<S: KvStore> {
    kv: S,
    notes: Vec<Note>,
}

impl<S: KvStore> NoteStore<S> {
    /// Creates a store over `kv` with an empty collection. Call
    /// [`Self::load`] to pull the persisted snapshot in.
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            notes: Vec::new(),
        }
    }

    /// Reads the snapshot from the backing store. A missing key is an
    /// empty collection, not an error. An unparseable snapshot yields
    /// [`JotError::CorruptData`] and leaves the collection empty; the
    /// intended caller policy is to warn and continue.
    pub fn load(&mut self) -> Result<()> {
        self.notes.clear();
        let raw = match self.kv.get(NOTES_KEY)? {
            Some(raw) => raw,
            None => return Ok(()),
        };
        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => {
                self.notes = notes;
                Ok(())
            }
            Err(e) => Err(JotError::CorruptData(e)),
        }
    }

    /// The collection in insertion order. New notes append; the store
    /// never re-sorts.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == *id)
    }

    /// Appends a new note built from the draft, then mirrors the
    /// collection. Returns the fresh id alongside the persist outcome.
    pub fn add(&mut self, draft: NoteDraft) -> (Uuid, PersistOutcome) {
        let note = Note::new(draft);
        let id = note.id;
        self.notes.push(note);
        (id, self.persist())
    }

    /// Merges `patch` onto the note with `id` and stamps `updated_at`.
    /// An absent id is a silent no-op (`false`). The mirror write runs
    /// either way.
    pub fn update(&mut self, id: &Uuid, patch: NotePatch) -> (bool, PersistOutcome) {
        let found = match self.notes.iter_mut().find(|n| n.id == *id) {
            Some(note) => {
                note.apply(patch);
                true
            }
            None => false,
        };
        (found, self.persist())
    }

    /// Removes the note with `id` if present. Idempotent; an absent id
    /// is a no-op (`false`). The mirror write runs either way.
    pub fn delete(&mut self, id: &Uuid) -> (bool, PersistOutcome) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != *id);
        (self.notes.len() < before, self.persist())
    }

    /// Serializes the full collection and writes it under [`NOTES_KEY`].
    /// Never touches the in-memory collection.
    pub fn persist(&mut self) -> PersistOutcome {
        let snapshot = serde_json::to_string(&self.notes)
            .map_err(|e| JotError::PersistFailed(Box::new(e.into())))?;
        self.kv
            .set(NOTES_KEY, &snapshot)
            .map_err(|e| JotError::PersistFailed(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::palette;
    use crate::store::memory::InMemoryKv;

    fn draft(title: &str, content: &str) -> NoteDraft {
        NoteDraft::new(title, content, palette::PINK)
    }

    #[test]
    fn load_of_missing_key_is_empty() {
        let mut store = NoteStore::new(InMemoryKv::new());
        store.load().unwrap();
        assert!(store.notes().is_empty());
    }

    #[test]
    fn load_of_corrupt_snapshot_errors_and_leaves_empty() {
        let mut kv = InMemoryKv::new();
        kv.seed(NOTES_KEY, "{not json[");
        let mut store = NoteStore::new(kv);
        let err = store.load().unwrap_err();
        assert!(matches!(err, JotError::CorruptData(_)));
        assert!(store.notes().is_empty());
    }

    #[test]
    fn add_appends_with_fresh_id_and_created_at() {
        let mut store = NoteStore::new(InMemoryKv::new());
        let (id_a, persisted) = store.add(draft("A", "B"));
        persisted.unwrap();
        let (id_b, persisted) = store.add(draft("C", "D"));
        persisted.unwrap();

        assert_eq!(store.notes().len(), 2);
        assert_ne!(id_a, id_b);
        let a = store.get(&id_a).unwrap();
        assert_eq!(a.title, "A");
        assert_eq!(a.content, "B");
        assert_eq!(a.color, palette::PINK);
        assert!(a.updated_at.is_none());
        // insertion order
        assert_eq!(store.notes()[0].id, id_a);
        assert_eq!(store.notes()[1].id, id_b);
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let mut store = NoteStore::new(InMemoryKv::new());
        let (id, _) = store.add(draft("A", "B"));
        let (found, persisted) = store.update(
            &id,
            NotePatch {
                title: Some("A2".into()),
                ..Default::default()
            },
        );
        persisted.unwrap();
        assert!(found);

        let note = store.get(&id).unwrap();
        assert_eq!(note.title, "A2");
        assert_eq!(note.content, "B");
        assert!(note.updated_at.is_some());
    }

    #[test]
    fn update_of_absent_id_is_silent_noop() {
        let mut store = NoteStore::new(InMemoryKv::new());
        store.add(draft("A", "B"));
        let before: Vec<_> = store.notes().to_vec();

        let (found, persisted) = store.update(
            &Uuid::new_v4(),
            NotePatch {
                title: Some("ghost".into()),
                ..Default::default()
            },
        );
        persisted.unwrap();
        assert!(!found);
        assert_eq!(store.notes(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = NoteStore::new(InMemoryKv::new());
        let (id, _) = store.add(draft("A", "B"));

        let (removed, persisted) = store.delete(&id);
        persisted.unwrap();
        assert!(removed);
        assert!(store.notes().is_empty());

        let (removed, persisted) = store.delete(&id);
        persisted.unwrap();
        assert!(!removed);
        assert!(store.notes().is_empty());
    }

    #[test]
    fn roundtrip_through_the_same_backing() {
        let mut store = NoteStore::new(InMemoryKv::new());
        let (id, _) = store.add(draft("A", "B"));
        store.update(
            &id,
            NotePatch {
                content: Some("B2".into()),
                ..Default::default()
            },
        );
        let original: Vec<_> = store.notes().to_vec();

        // Reload from the same kv contents.
        let mut kv = InMemoryKv::new();
        kv.seed(NOTES_KEY, &serde_json::to_string(&original).unwrap());
        let mut reloaded = NoteStore::new(kv);
        reloaded.load().unwrap();
        assert_eq!(reloaded.notes(), original.as_slice());
    }

    #[test]
    fn failed_persist_keeps_memory_authoritative() {
        let mut kv = InMemoryKv::new();
        kv.fail_writes();
        let mut store = NoteStore::new(kv);

        let (id, persisted) = store.add(draft("A", "B"));
        assert!(matches!(
            persisted.unwrap_err(),
            JotError::PersistFailed(_)
        ));
        // The note is in memory despite the failed mirror write.
        assert!(store.get(&id).is_some());

        // Next mutation persists the newer, still-divergent state once
        // the backing store recovers.
        store.kv.heal_writes();
        let (_, persisted) = store.add(draft("C", "D"));
        persisted.unwrap();
        assert_eq!(
            serde_json::from_str::<Vec<Note>>(&store.kv.get(NOTES_KEY).unwrap().unwrap())
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn spec_example_lifecycle() {
        let mut store = NoteStore::new(InMemoryKv::new());
        let (id, _) = store.add(NoteDraft::new("A", "B", "#FFD3E0"));
        assert_eq!(store.notes().len(), 1);

        store.update(
            &id,
            NotePatch {
                title: Some("A2".into()),
                ..Default::default()
            },
        );
        let note = store.get(&id).unwrap();
        assert_eq!(note.title, "A2");
        assert_eq!(note.content, "B");

        store.delete(&id);
        assert!(store.notes().is_empty());
    }
}
