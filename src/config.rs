//! Settings persistence — a single JSON blob with defaults merged on load.
//!
//! The blob keeps the camelCase keys of the persisted settings format
//! (`apiKey`, `rootFolder`, `searchResultsFolder`); any key absent from disk
//! falls back to its default so older blobs keep loading as the schema grows.

use serde::{Deserialize, Serialize};
use std::env;
use std::io;
use std::path::Path;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const API_KEY: &str = "EXA_API_KEY";
    pub const SETTINGS_PATH: &str = "EXA_NOTES_SETTINGS";
}

/// Default values
pub mod defaults {
    pub const ROOT_FOLDER: &str = "Exa";
    pub const SEARCH_RESULTS_FOLDER: &str = "Exa Search Results";
    pub const SETTINGS_FILE: &str = "settings.json";
    pub const NUM_RESULTS: u32 = 10;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Process-wide settings, loaded at startup and passed explicitly to the
/// components that need them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub api_key: String,
    pub root_folder: String,
    pub search_results_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            root_folder: defaults::ROOT_FOLDER.to_string(),
            search_results_folder: defaults::SEARCH_RESULTS_FOLDER.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON blob on disk.
    ///
    /// A missing file yields pure defaults; a partial blob is merged with
    /// defaults per-field; an unreadable blob is logged and replaced with
    /// defaults rather than failing startup.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("[SETTINGS] Invalid settings blob at {:?}: {}. Using defaults.", path, e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                log::warn!("[SETTINGS] Failed to read {:?}: {}. Using defaults.", path, e);
                Settings::default()
            }
        }
    }

    /// Apply environment overrides so the blob never has to hold the API key.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(key) = env::var(env_vars::API_KEY) {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
        self
    }

    /// Persist the full settings blob, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
    }
}
