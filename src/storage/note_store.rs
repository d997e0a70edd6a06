use std::collections::HashSet;

use tracing::{debug, warn};

use super::KeyValueStorage;
use crate::entity::{now_millis, Note, NoteDraft, NotePatch};
use crate::error::{BlocoError, Result};

/// Key the collection is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "notes-app-data";

/// Owner of the note collection.
///
/// Every mutation builds the next collection, writes it through the storage
/// backend, and only then replaces the in-memory copy. A failed write leaves
/// both sides at the previous state.
pub struct NoteStore {
    notes: Vec<Note>,
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl NoteStore {
    /// Load the collection stored under `key`.
    ///
    /// Missing data yields an empty store. Data that does not parse as a note
    /// collection, or that breaks the id/timestamp invariants, is reported as
    /// [`BlocoError::CorruptData`] and left untouched.
    pub fn open(storage: Box<dyn KeyValueStorage>, key: &str) -> Result<Self> {
        let notes = load(storage.as_ref(), key)?;

        Ok(Self {
            notes,
            storage,
            key: key.to_string(),
        })
    }

    /// Like [`NoteStore::open`], but recovers from corrupt data.
    ///
    /// The unreadable value is moved, unchanged, to `<key>.corrupt-<epoch ms>`
    /// before the collection is reset to empty. The load error is handed back
    /// so the caller can still report it.
    pub fn open_or_reset(
        storage: Box<dyn KeyValueStorage>,
        key: &str,
    ) -> Result<(Self, Option<BlocoError>)> {
        match load(storage.as_ref(), key) {
            Ok(notes) => Ok((
                Self {
                    notes,
                    storage,
                    key: key.to_string(),
                },
                None,
            )),
            Err(err @ BlocoError::CorruptData { .. }) => {
                let backup_key = format!("{}.corrupt-{}", key, now_millis());
                storage.rename(key, &backup_key)?;
                warn!(key, backup_key = %backup_key, error = %err, "stored notes are corrupt, starting empty");

                let mut store = Self {
                    notes: Vec::new(),
                    storage,
                    key: key.to_string(),
                };
                store.commit(Vec::new())?;
                Ok((store, Some(err)))
            }
            Err(err) => Err(err),
        }
    }

    /// All notes in collection order (newest creation first)
    pub fn get_all(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Find a note by full id or by a unique id prefix
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&Note> {
        if let Some(note) = self.get(id_or_prefix) {
            return Ok(note);
        }

        let mut matches = self
            .notes
            .iter()
            .filter(|n| !id_or_prefix.is_empty() && n.id.starts_with(id_or_prefix));

        match (matches.next(), matches.count()) {
            (Some(note), 0) => Ok(note),
            (Some(_), rest) => Err(BlocoError::AmbiguousId(id_or_prefix.to_string(), rest + 1)),
            (None, _) => Err(BlocoError::NoteNotFound(id_or_prefix.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Create a note from a draft and put it at the front of the collection.
    ///
    /// Title validation is the caller's job.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note> {
        let mut note = Note::from_draft(draft, now_millis());
        while self.get(&note.id).is_some() {
            note.id = uuid::Uuid::new_v4().to_string();
        }

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        debug!(id = %note.id, "created note");
        Ok(note)
    }

    /// Replace the patched fields of the note with `id`.
    ///
    /// Returns `None` without writing anything when no such note exists.
    pub fn update(&mut self, id: &str, patch: NotePatch) -> Result<Option<Note>> {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            debug!(id, "update of unknown note ignored");
            return Ok(None);
        };

        let mut next = self.notes.clone();
        let note = &mut next[index];
        patch.apply_to(note);
        note.updated_at = now_millis().max(note.updated_at);
        let updated = note.clone();

        self.commit(next)?;

        debug!(id, "updated note");
        Ok(Some(updated))
    }

    /// Remove the note with `id`. Returns whether a note was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            debug!(id, "delete of unknown note ignored");
            return Ok(false);
        }

        let next: Vec<Note> = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit(next)?;

        debug!(id, "deleted note");
        Ok(true)
    }

    /// Size in bytes of the serialized collection
    pub fn serialized_len(&self) -> Result<usize> {
        Ok(serde_json::to_string(&self.notes)?.len())
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        self.save(&next)?;
        self.notes = next;
        Ok(())
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let payload = serde_json::to_string(notes)?;
        self.storage.set(&self.key, &payload)?;
        debug!(key = %self.key, count = notes.len(), bytes = payload.len(), "saved notes");
        Ok(())
    }
}

fn load(storage: &dyn KeyValueStorage, key: &str) -> Result<Vec<Note>> {
    let notes = match storage.get(key)? {
        Some(raw) => parse_collection(key, &raw)?,
        None => Vec::new(),
    };
    debug!(key, count = notes.len(), "loaded notes");
    Ok(notes)
}

fn parse_collection(key: &str, raw: &str) -> Result<Vec<Note>> {
    let corrupt = |reason: String| BlocoError::CorruptData {
        key: key.to_string(),
        reason,
    };

    let notes: Vec<Note> = serde_json::from_str(raw).map_err(|e| corrupt(e.to_string()))?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id.as_str()) {
            return Err(corrupt(format!("duplicate note id {}", note.id)));
        }
        if note.created_at > note.updated_at {
            return Err(corrupt(format!(
                "note {} was updated before it was created",
                note.id
            )));
        }
    }

    Ok(notes)
}
