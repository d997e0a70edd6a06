//! Durable key-value storage and the note store built on top of it.
//!
//! `NoteStore` only ever talks to a [`KeyValueStorage`]; swapping the file
//! backend for SQLite (or the in-memory one used in tests) does not touch the
//! mutation logic.

mod file_backend;
mod memory_backend;
mod note_store;
mod sqlite_backend;

pub use file_backend::FileStorage;
pub use memory_backend::MemoryStorage;
pub use note_store::{NoteStore, DEFAULT_STORAGE_KEY};
pub use sqlite_backend::SqliteStorage;

use crate::error::Result;

/// A synchronous, string-keyed persistent store.
///
/// `set` must be atomic: a reader sees either the previous value or the new
/// one, never a partial write. A stored value that is not text is reported by
/// `get` as [`crate::BlocoError::CorruptData`].
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Move the raw value under `from` to `to`, byte for byte.
    /// Missing `from` is a no-op.
    fn rename(&self, from: &str, to: &str) -> Result<()>;
}
