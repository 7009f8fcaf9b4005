//! Leaderboard persistence.
//!
//! The contract is load-once / save-once per finished game: `load` returns
//! the ranked list (empty when nothing was stored yet) and `save` replaces
//! it completely. Backends choose where the data lives.

use rustc_hash::FxHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::entry::{format_records, parse_records, LeaderboardEntry};
use super::error::LeaderboardError;
use crate::core::config::ConfigKey;

/// Storage backend for leaderboards, one list per configuration.
pub trait LeaderboardStore {
    /// Load the stored list. Missing data loads as an empty list.
    fn load(&self, key: &ConfigKey) -> Result<Vec<LeaderboardEntry>, LeaderboardError>;

    /// Replace the stored list.
    fn save(&mut self, key: &ConfigKey, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError>;
}

/// Leaderboards as text files, one per configuration, in a directory.
///
/// ```no_run
/// use memory_match::core::{ConfigKey, PairCount};
/// use memory_match::leaderboard::{FileStore, LeaderboardStore};
///
/// let store = FileStore::new("leaderboards");
/// let key = ConfigKey::default_for(PairCount::Four);
/// let leaders = store.load(&key).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store leaderboards under `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the leaderboard files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a configuration's leaderboard.
    #[must_use]
    pub fn path_for(&self, key: &ConfigKey) -> PathBuf {
        self.dir.join(key.leaderboard_file_name())
    }
}

impl LeaderboardStore for FileStore {
    fn load(&self, key: &ConfigKey) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => parse_records(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "no leaderboard yet, starting empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &ConfigKey, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        fs::write(&path, format_records(entries))?;
        debug!(path = %path.display(), entries = entries.len(), "leaderboard saved");
        Ok(())
    }
}

/// In-memory leaderboards, for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    boards: FxHashMap<ConfigKey, Vec<LeaderboardEntry>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a configuration with existing entries.
    #[must_use]
    pub fn with_entries(mut self, key: ConfigKey, entries: Vec<LeaderboardEntry>) -> Self {
        self.boards.insert(key, entries);
        self
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self, key: &ConfigKey) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        Ok(self.boards.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &ConfigKey, entries: &[LeaderboardEntry]) -> Result<(), LeaderboardError> {
        self.boards.insert(key.clone(), entries.to_vec());
        Ok(())
    }
}
