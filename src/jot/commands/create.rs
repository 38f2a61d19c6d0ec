use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::store::notes::NoteStore;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &mut NoteStore<S>, draft: NoteDraft) -> Result<CmdResult> {
    let (id, persisted) = store.add(draft);

    let mut result = CmdResult::default();
    if let Some(note) = store.get(&id) {
        result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
        result.affected_notes.push(note.clone());
    }
    if let Err(e) = persisted {
        result.note_persist_failure(&e);
    }
    Ok(result)
}
