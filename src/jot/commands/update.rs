use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NotePatch;
use crate::store::notes::NoteStore;
use crate::store::KvStore;
use uuid::Uuid;

pub fn run<S: KvStore>(store: &mut NoteStore<S>, id: Uuid, patch: NotePatch) -> Result<CmdResult> {
    let (found, persisted) = store.update(&id, patch);

    let mut result = CmdResult::default();
    if found {
        if let Some(note) = store.get(&id) {
            result.add_message(CmdMessage::success(format!("Note updated: {}", note.title)));
            result.affected_notes.push(note.clone());
        }
    } else {
        // Absent ids are a silent no-op at the store level; the message
        // is informational only.
        result.add_message(CmdMessage::info(format!("No note with id {}", id)));
    }
    if let Err(e) = persisted {
        result.note_persist_failure(&e);
    }
    Ok(result)
}
