pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod export;
pub mod notebook;
pub mod search;
pub mod storage;
pub mod warnings;

pub use config::Config;
pub use entity::{Note, NoteDraft, NotePatch, PaletteColor};
pub use error::{BlocoError, Result};
pub use notebook::Notebook;
pub use search::query;
pub use storage::{KeyValueStorage, NoteStore};
