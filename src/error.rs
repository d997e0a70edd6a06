use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlocoError {
    #[error("Not in a bloco notebook. Run 'bloco init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .bloco/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Ambiguous note id '{0}' matches {1} notes, use a longer prefix")]
    AmbiguousId(String, usize),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Stored notes under '{key}' are corrupt: {reason}")]
    CorruptData { key: String, reason: String },

    #[error("Confirmation required. Use --force to delete in non-interactive mode")]
    ConfirmationRequired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, BlocoError>;
