use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_notes;
use crate::store::notes::NoteStore;
use crate::store::KvStore;

pub fn run<S: KvStore>(store: &NoteStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(index_notes(store.notes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_notes_in_insertion_order() {
        let fixture = StoreFixture::new().with_note("first", "a").with_note("second", "b");
        let result = run(&fixture.store).unwrap();

        assert_eq!(result.listed_notes.len(), 2);
        assert_eq!(result.listed_notes[0].position, 1);
        assert_eq!(result.listed_notes[0].note.title, "first");
        assert_eq!(result.listed_notes[1].note.title, "second");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed_notes.is_empty());
    }
}
