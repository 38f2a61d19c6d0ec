use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_notes;
use crate::store::notes::NoteStore;
use crate::store::KvStore;
use uuid::Uuid;

pub fn run<S: KvStore>(store: &NoteStore<S>, ids: &[Uuid]) -> Result<CmdResult> {
    let indexed = index_notes(store.notes());
    let listed = ids
        .iter()
        .filter_map(|id| indexed.iter().find(|dn| dn.note.id == *id).cloned())
        .collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_requested_notes_with_positions() {
        let fixture = StoreFixture::new().with_note("a", "x").with_note("b", "y");
        let ids: Vec<_> = fixture.store.notes().iter().map(|n| n.id).collect();

        let result = run(&fixture.store, &[ids[1]]).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].position, 2);
        assert_eq!(result.listed_notes[0].note.title, "b");
    }
}
