use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_notes, DisplayNote};
use crate::model::Note;
use crate::store::notes::NoteStore;
use crate::store::KvStore;

/// Case-insensitive substring match against title or content. An empty
/// query matches everything.
pub fn matches(note: &Note, query_lower: &str) -> bool {
    query_lower.is_empty()
        || note.title.to_lowercase().contains(query_lower)
        || note.content.to_lowercase().contains(query_lower)
}

/// Filters the collection, preserving order and canonical positions.
/// Derived and non-persistent; recomputed from the full collection on
/// every call.
pub fn run<S: KvStore>(store: &NoteStore<S>, query: &str) -> Result<CmdResult> {
    let query_lower = query.to_lowercase();
    let listed: Vec<DisplayNote> = index_notes(store.notes())
        .into_iter()
        .filter(|dn| matches(&dn.note, &query_lower))
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
