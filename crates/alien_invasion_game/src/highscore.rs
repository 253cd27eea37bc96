//! The high score file: a single JSON number.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StorageError};

pub const DEFAULT_HIGH_SCORE_FILE: &str = "highest_score.json";

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means no high score yet.
    pub fn load(&self) -> Result<u64> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting at 0", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let score: u64 = serde_json::from_str(&json).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Loaded high score {score} from {}", self.path.display());
        Ok(score)
    }

    /// Like [`load`](Self::load), but falls back to 0 on a damaged file.
    pub fn load_or_default(&self) -> u64 {
        self.load().unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable high score: {e}");
            0
        })
    }

    pub fn save(&self, score: u64) -> Result<()> {
        let json = serde_json::to_string(&score).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("High score {score} saved to {}", self.path.display());
        Ok(())
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join(DEFAULT_HIGH_SCORE_FILE));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join(DEFAULT_HIGH_SCORE_FILE));
        store.save(4250).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "4250");
        assert_eq!(store.load().unwrap(), 4250);
    }

    #[test]
    fn malformed_file_is_an_error_but_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HIGH_SCORE_FILE);
        fs::write(&path, "{\"score\": 3}").unwrap();
        let store = HighScoreStore::new(path);
        assert!(matches!(store.load(), Err(StorageError::Json { .. })));
        assert_eq!(store.load_or_default(), 0);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("nope").join("score.json"));
        assert!(matches!(store.save(10), Err(StorageError::Io { .. })));
    }
}
