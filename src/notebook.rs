use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Backend, Config, CorruptPolicy};
use crate::error::{BlocoError, Result};
use crate::storage::{FileStorage, KeyValueStorage, NoteStore, SqliteStorage};

pub const BLOCO_DIR: &str = ".bloco";

/// A `.bloco/` directory: its configuration and the storage behind it.
pub struct Notebook {
    dir: PathBuf,
    config: Config,
}

impl Notebook {
    /// Create a new notebook under `root` with the default config and no notes
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(BLOCO_DIR);

        if dir.exists() {
            return Err(BlocoError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let config = Config::default();
        config.save(&dir)?;

        let notebook = Self { dir, config };
        notebook.storage()?.set(&notebook.config.storage_key, "[]")?;

        Ok(notebook)
    }

    /// Open the notebook under `root`
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(BLOCO_DIR);

        if !dir.is_dir() {
            return Err(BlocoError::NotInitialized);
        }

        let config = Config::load(&dir)?;
        Ok(Self { dir, config })
    }

    /// Walk up from `start` looking for a `.bloco/` directory.
    ///
    /// Falls back to `start` itself so that `open` reports `NotInitialized`.
    pub fn find_root(start: &Path) -> PathBuf {
        let mut current = start;
        loop {
            if current.join(BLOCO_DIR).is_dir() {
                return current.to_path_buf();
            }
            match current.parent() {
                Some(parent) => current = parent,
                None => return start.to_path_buf(),
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open the configured storage backend
    pub fn storage(&self) -> Result<Box<dyn KeyValueStorage>> {
        let storage: Box<dyn KeyValueStorage> = match self.config.backend {
            Backend::File => Box::new(FileStorage::new(&self.dir)),
            Backend::Sqlite => Box::new(SqliteStorage::open(&self.dir)?),
        };
        Ok(storage)
    }

    /// Load the note store, applying the configured corrupt-data policy.
    ///
    /// With [`CorruptPolicy::Reset`] the recovered load error comes back as the
    /// second element instead of failing.
    pub fn open_store(&self) -> Result<(NoteStore, Option<BlocoError>)> {
        let storage = self.storage()?;
        let key = &self.config.storage_key;

        match self.config.on_corrupt {
            CorruptPolicy::Fail => Ok((NoteStore::open(storage, key)?, None)),
            CorruptPolicy::Reset => NoteStore::open_or_reset(storage, key),
        }
    }
}
