//! Persisted user preferences.
//!
//! State is stored as a JSON string under a single key in a simple
//! key-value store. Loading never fails: anything missing or unreadable
//! falls back to the defaults. Saving failures are logged and dropped so
//! a read-only disk never interrupts rendering.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::{Result, ScalarError};
use crate::state::AppState;

/// Key under which the state is stored.
pub const STORAGE_KEY: &str = "scalar-user-settings";

/// A minimal string key-value store.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted in the platform configuration directory, or `None` if
    /// the home directory cannot be determined.
    ///
    /// On Linux: `~/.config/scalar`
    /// On macOS: `~/Library/Application Support/Scalar`
    /// On Windows: `%APPDATA%\Scalar\config`
    pub fn default_location() -> Option<Self> {
        config_dir().map(Self::new)
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ScalarError::Io { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ScalarError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| ScalarError::Io { path, source })
    }
}

/// In-memory store for tests and for hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Platform-specific configuration directory for the application.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "Scalar").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the saved state, or the defaults if none can be read.
pub fn load_state<S: SettingsStore + ?Sized>(store: &S) -> AppState {
    let stored = match store.get(STORAGE_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!("no saved settings, using defaults");
            return AppState::default();
        }
        Err(e) => {
            warn!("failed to read settings: {e}");
            return AppState::default();
        }
    };

    AppState::from_json_merged(&stored).unwrap_or_else(|e| {
        warn!("failed to parse saved settings: {e}");
        AppState::default()
    })
}

/// Save the state. Errors are logged, never returned.
pub fn save_state<S: SettingsStore + ?Sized>(store: &mut S, state: &AppState) {
    let result = state
        .to_json()
        .and_then(|json| store.set(STORAGE_KEY, &json));
    if let Err(e) = result {
        warn!("failed to save settings: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Orientation;
    use crate::theory::{Note, ScaleType};

    #[test]
    fn empty_store_loads_defaults() {
        assert_eq!(load_state(&MemoryStore::new()), AppState::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let state = AppState::default()
            .with_key(Note::DSharp)
            .with_scale(ScaleType::Pentatonic)
            .with_orientation(Orientation::Vertical);
        save_state(&mut store, &state);
        assert_eq!(load_state(&store), state);
    }

    #[test]
    fn corrupt_entry_loads_defaults() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "not json at all").unwrap();
        assert_eq!(load_state(&store), AppState::default());
    }

    #[test]
    fn file_store_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);

        let state = AppState::default().with_key(Note::B).toggled_note_names();
        save_state(&mut store, &state);
        assert!(store.path_for(STORAGE_KEY).exists());

        let reopened = FileStore::new(dir.path());
        assert_eq!(load_state(&reopened), state);
    }

    #[test]
    fn unwritable_location_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the directory should be makes create_dir_all fail.
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = FileStore::new(blocker.join("nested"));
        save_state(&mut store, &AppState::default().with_key(Note::E));
        assert!(!store.path_for(STORAGE_KEY).exists());
        assert_eq!(load_state(&store), AppState::default());
    }
}
