//! High score persistence
//!
//! A single integer slot keyed by [`HIGH_SCORE_KEY`]. The session reads it
//! once at startup and writes it whenever the best score goes up. Writes
//! are best effort: a failed save is logged by the caller and never touches
//! the in-memory score.
//!
//! Backends:
//! - [`MemoryStore`]: in-process, for tests and embedding
//! - [`FileStore`]: JSON object on disk, written via tmp file + rename
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::HIGH_SCORE_KEY;

/// Storage failures
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("high score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("high score storage is unavailable")]
    Unavailable,
}

/// Get/set store for the persisted high score
pub trait HighScoreStore {
    /// Stored value, `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<i64>, PersistenceError>;

    /// Overwrite the stored value
    fn save(&mut self, high_score: i64) -> Result<(), PersistenceError>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Box<T> {
    fn load(&self) -> Result<Option<i64>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, high_score: i64) -> Result<(), PersistenceError> {
        (**self).save(high_score)
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<i64>,
    /// Simulate a broken backend
    pub fail_writes: bool,
    /// Successful saves so far
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: i64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Store whose saves always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<i64>, PersistenceError> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: i64) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable);
        }
        self.value = Some(high_score);
        self.writes += 1;
        Ok(())
    }
}

/// JSON file store: `{ "fishingGameHighScore": 1234 }`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<user data dir>/reel-frenzy/highscore.json`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("reel-frenzy").join("highscore.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> Result<BTreeMap<String, i64>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<Option<i64>, PersistenceError> {
        Ok(self.read_slots()?.get(HIGH_SCORE_KEY).copied())
    }

    fn save(&mut self, high_score: i64) -> Result<(), PersistenceError> {
        // Keep any other keys; only a corrupt file is replaced wholesale
        let mut slots = match self.read_slots() {
            Ok(slots) => slots,
            Err(PersistenceError::Corrupt(e)) => {
                log::warn!("Replacing corrupt high score file {}: {e}", self.path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        slots.insert(HIGH_SCORE_KEY.to_string(), high_score);

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&slots)?)?;
        std::fs::rename(&tmp, &self.path)?;
        log::debug!("High score {} saved to {}", high_score, self.path.display());
        Ok(())
    }
}

/// Browser LocalStorage slot
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistenceError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> Result<Option<i64>, PersistenceError> {
        let raw = Self::storage()?
            .get_item(HIGH_SCORE_KEY)
            .map_err(|_| PersistenceError::Unavailable)?;
        // Garbage in the slot counts as no score
        Ok(raw.and_then(|s| s.trim().parse().ok()))
    }

    fn save(&mut self, high_score: i64) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(HIGH_SCORE_KEY, &high_score.to_string())
            .map_err(|_| PersistenceError::Unavailable)
    }
}
