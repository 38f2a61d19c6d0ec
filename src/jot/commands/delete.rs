use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::notes::NoteStore;
use crate::store::KvStore;
use uuid::Uuid;

pub fn run<S: KvStore>(store: &mut NoteStore<S>, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let title = store.get(id).map(|n| n.title.clone());
        let (removed, persisted) = store.delete(id);
        if removed {
            result.add_message(CmdMessage::success(format!(
                "Note deleted: {}",
                title.unwrap_or_default()
            )));
        } else {
            result.add_message(CmdMessage::info(format!("No note with id {}", id)));
        }
        if let Err(e) = persisted {
            result.note_persist_failure(&e);
        }
    }

    Ok(result)
}
