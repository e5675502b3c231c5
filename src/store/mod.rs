//! Persistence of the board configuration
//!
//! The whole [`Configuration`] lives under a single key as JSON. Reading
//! never fails from the caller's point of view: missing or corrupt data
//! yields the defaults. Writes are explicit (`save`, `reset`) and their
//! failures are logged rather than surfaced.

mod backend;

pub use backend::{FileStore, KeyValueStore, MemoryStore};

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Configuration;

/// Key the configuration is stored under
pub const SETTINGS_KEY: &str = "talkboard.settings";

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Loads and persists the configuration through a [`KeyValueStore`]
pub struct SettingsStore {
    backend: Box<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Store backed by JSON files in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(dir))
    }

    /// Load the persisted configuration merged over the defaults.
    ///
    /// Absent data, read errors and parse errors all yield the defaults.
    pub fn load(&self) -> Configuration {
        let raw = match self.backend.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved settings found, using defaults");
                return Configuration::default();
            }
            Err(e) => {
                warn!("Failed to read saved settings: {}. Using defaults.", e);
                return Configuration::default();
            }
        };

        match Configuration::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse saved settings: {}. Using defaults.", e);
                Configuration::default()
            }
        }
    }

    /// Persist the full configuration, returning any failure
    pub fn try_save(&mut self, config: &Configuration) -> Result<(), StoreError> {
        let json = config.to_json()?;
        self.backend.set(SETTINGS_KEY, &json)
    }

    /// Persist the full configuration. Failures are logged and the
    /// previously stored state stays in place.
    pub fn save(&mut self, config: &Configuration) -> bool {
        match self.try_save(config) {
            Ok(()) => {
                debug!("Settings saved");
                true
            }
            Err(e) => {
                warn!("Failed to save settings: {}", e);
                false
            }
        }
    }

    /// Persist and return a fresh copy of the defaults
    pub fn reset(&mut self) -> Configuration {
        let defaults = Configuration::default();
        if self.save(&defaults) {
            info!("Settings reset to defaults");
        }
        defaults
    }
}
