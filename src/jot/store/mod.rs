//! # Storage Layer
//!
//! Two pieces live here: a durable key-value abstraction and the note
//! collection built on top of it.
//!
//! ## KvStore
//!
//! [`KvStore`] is the whole durable contract: `get(key)` returns the
//! stored string or `None`, `set(key, value)` writes it or fails. The
//! application uses a single fixed key (see [`notes::NOTES_KEY`]) holding
//! the serialized collection.
//!
//! The contract is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemoryKv`] (no filesystem, and a
//!   switch to make writes fail on demand)
//! - Allow **future backends** without touching the collection logic
//!
//! ## Implementations
//!
//! - [`fs::FileKv`]: production storage; each key maps to `{key}.json`
//!   under a data directory, created on first write.
//! - [`memory::InMemoryKv`]: in-memory map for tests.
//!
//! ## NoteStore
//!
//! [`notes::NoteStore`] owns the in-memory collection and mirrors every
//! mutation to the backing store as a full snapshot. See its module
//! documentation for the divergence rules when a write fails.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod notes;

/// Durable key-value storage: one string per key, whole-value reads and
/// writes, no partial updates.
pub trait KvStore {
    /// Read the value at `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` at `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
