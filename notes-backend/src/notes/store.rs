//! NoteStore — process-local note storage
//!
//! Holds every note in memory behind a single lock that guards both the
//! note map and the ID counter. Nothing survives a restart.

use chrono::Utc;
use notes_types::Note;
use parking_lot::Mutex;
use std::collections::BTreeMap;

use super::validate::{NewNote, NoteChanges};
use crate::error::NoteError;

struct StoreState {
    /// Keyed by ID; IDs only grow, so key order is creation order
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

/// In-memory note collection. Reads hand out clones, never references.
pub struct NoteStore {
    state: Mutex<StoreState>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                notes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// All notes in creation order
    pub fn list(&self) -> Vec<Note> {
        self.state.lock().notes.values().cloned().collect()
    }

    pub fn create(&self, new_note: NewNote) -> Note {
        let mut state = self.state.lock();

        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let note = Note {
            id,
            title: new_note.title,
            content: new_note.content,
            created_at: now,
            updated_at: now,
        };
        state.notes.insert(id, note.clone());

        log::info!("[NOTES] Created note {}", id);
        note
    }

    pub fn get(&self, id: i64) -> Result<Note, NoteError> {
        self.state
            .lock()
            .notes
            .get(&id)
            .cloned()
            .ok_or(NoteError::NotFound)
    }

    /// Apply only the supplied fields. `updated_at` moves only when
    /// something was supplied, and never moves backwards.
    pub fn update(&self, id: i64, changes: NoteChanges) -> Result<Note, NoteError> {
        let mut state = self.state.lock();
        let note = state.notes.get_mut(&id).ok_or(NoteError::NotFound)?;

        if changes.is_empty() {
            log::debug!("[NOTES] Update of note {} carried no changes", id);
            return Ok(note.clone());
        }

        if let Some(title) = changes.title {
            note.title = title;
        }
        if let Some(content) = changes.content {
            note.content = content;
        }
        note.updated_at = Utc::now().max(note.updated_at);

        log::info!("[NOTES] Updated note {}", id);
        Ok(note.clone())
    }

    pub fn delete(&self, id: i64) -> Result<(), NoteError> {
        match self.state.lock().notes.remove(&id) {
            Some(_) => {
                log::info!("[NOTES] Deleted note {}", id);
                Ok(())
            }
            None => Err(NoteError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn new_note(title: &str, content: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_first_note_gets_id_one() {
        let store = NoteStore::new();
        let note = store.create(new_note("A", ""));

        assert_eq!(note.id, 1);
        assert_eq!(note.content, "");
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_list_is_creation_order() {
        let store = NoteStore::new();
        assert!(store.list().is_empty());

        store.create(new_note("first", ""));
        store.create(new_note("second", ""));

        let titles: Vec<_> = store.list().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_get_returns_created_record() {
        let store = NoteStore::new();
        let created = store.create(new_note("A", "body"));

        assert_eq!(store.get(created.id), Ok(created));
        assert_eq!(store.get(999), Err(NoteError::NotFound));
    }

    #[test]
    fn test_update_content_only_keeps_title() {
        let store = NoteStore::new();
        let created = store.create(new_note("Title", "old"));

        let updated = store
            .update(
                created.id,
                NoteChanges {
                    title: None,
                    content: Some("new".to_string()),
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Title");
        assert_eq!(updated.content, "new");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let store = NoteStore::new();
        let created = store.create(new_note("Title", "body"));

        let updated = store.update(created.id, NoteChanges::default()).unwrap();
        assert_eq!(updated, created);
    }

    #[test]
    fn test_update_missing_note() {
        let store = NoteStore::new();
        let result = store.update(
            7,
            NoteChanges {
                title: Some("x".to_string()),
                content: None,
            },
        );
        assert_eq!(result, Err(NoteError::NotFound));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_delete_then_get_and_delete_again() {
        let store = NoteStore::new();
        let created = store.create(new_note("A", ""));

        assert_eq!(store.delete(created.id), Ok(()));
        assert_eq!(store.get(created.id), Err(NoteError::NotFound));
        assert_eq!(store.delete(created.id), Err(NoteError::NotFound));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = NoteStore::new();
        let first = store.create(new_note("A", ""));
        store.delete(first.id).unwrap();

        let second = store.create(new_note("B", ""));
        assert!(second.id > first.id);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(NoteStore::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| store.create(new_note(&format!("{}-{}", t, i), "")).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&200));
    }
}
