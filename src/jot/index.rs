//! Display positions for notes.
//!
//! The store identifies notes by stable UUIDs; nobody wants to type
//! those. The CLI shows 1-based positions over the collection in its
//! insertion order, and this module maps between the two. Positions are
//! assigned over the *full* collection, so a filtered listing (search)
//! keeps the same numbers as the plain listing.

use crate::error::{JotError, Result};
use crate::model::Note;
use uuid::Uuid;

/// A note paired with its 1-based display position.
#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub position: usize,
    pub note: Note,
}

/// Assigns positions to the collection in its stored order.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            position: i + 1,
            note: note.clone(),
        })
        .collect()
}

/// Resolves display positions to note ids, preserving input order.
pub fn resolve_positions(notes: &[Note], positions: &[usize]) -> Result<Vec<(usize, Uuid)>> {
    positions
        .iter()
        .map(|&pos| {
            notes
                .get(pos.checked_sub(1).ok_or_else(|| {
                    JotError::Api("Note positions start at 1".to_string())
                })?)
                .map(|note| (pos, note.id))
                .ok_or_else(|| JotError::Api(format!("No note at position {}", pos)))
        })
        .collect()
}
