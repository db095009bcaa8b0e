//! Persisted UI state
//!
//! Likes and the appearance preference live in one JSON document under the
//! user data directory. The whole file is rewritten on every change, so the
//! last writer wins.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// State file name under the app data directory
pub const STATE_FILE_NAME: &str = "state.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct PersistedState {
    liked_events: HashMap<String, bool>,
    dark_mode: bool,
}

/// Store for per-event likes and the dark-mode preference
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
    state: PersistedState,
}

impl StateStore {
    /// Default state file location under the user data directory
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::data_dir()
            .map(|dir| dir.join("eventist").join(STATE_FILE_NAME))
            .ok_or(StorageError::NoDataDir)
    }

    /// Load the state file, falling back to defaults when it is missing,
    /// unreadable, or corrupt
    pub fn load(path: PathBuf) -> Self {
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(state) => state,
                Err(err) => {
                    log::warn!("Corrupt state file {}: {}. Starting fresh", path.display(), err);
                    PersistedState::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => PersistedState::default(),
            Err(err) => {
                log::warn!("Could not read state file {}: {}. Starting fresh", path.display(), err);
                PersistedState::default()
            }
        };

        Self { path, state }
    }

    /// Whether an event key is currently liked; absent keys are unliked
    pub fn is_liked(&self, key: &str) -> bool {
        self.state.liked_events.get(key).copied().unwrap_or(false)
    }

    /// Flip the like flag for an event key and persist the whole map.
    ///
    /// Returns the new value.
    pub fn toggle_like(&mut self, key: &str) -> Result<bool, StorageError> {
        let entry = self.state.liked_events.entry(key.to_string()).or_insert(false);
        *entry = !*entry;
        let liked = *entry;
        self.save()?;
        Ok(liked)
    }

    /// The full like map, for row derivation
    pub fn liked_events(&self) -> &HashMap<String, bool> {
        &self.state.liked_events
    }

    pub fn dark_mode(&self) -> bool {
        self.state.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark: bool) -> Result<(), StorageError> {
        self.state.dark_mode = dark;
        self.save()
    }

    /// Rewrite the whole state file, creating parent directories on first use
    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }
}
