use super::KvStore;
use crate::error::{JotError, Result};
use std::collections::HashMap;

/// In-memory key-value storage for testing and development.
/// Does NOT persist data. Writes can be made to fail on demand to
/// exercise the divergence path.
#[derive(Default)]
pub struct InMemoryKv {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// After this call every `set` fails until [`Self::heal_writes`].
    pub fn fail_writes(&mut self) {
        self.fail_writes = true;
    }

    pub fn heal_writes(&mut self) {
        self.fail_writes = false;
    }

    /// Seed a raw value, bypassing the failure switch. Used by tests to
    /// plant malformed snapshots.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KvStore for InMemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(JotError::Store("write failure (simulated)".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{palette, NoteDraft};
    use crate::store::notes::NoteStore;

    pub struct StoreFixture {
        pub store: NoteStore<InMemoryKv>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::new(InMemoryKv::new()),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = NoteDraft::new(
                    format!("Test Note {}", i + 1),
                    format!("Content for note {}", i + 1),
                    palette::DEFAULT_COLOR,
                );
                let (_, persisted) = self.store.add(draft);
                persisted.unwrap();
            }
            self
        }

        pub fn with_note(mut self, title: &str, content: &str) -> Self {
            let (_, persisted) =
                self.store
                    .add(NoteDraft::new(title, content, palette::DEFAULT_COLOR));
            persisted.unwrap();
            self
        }
    }
}
