//! Local preference storage: a small string key-value file.
//!
//! Read once at startup, written on the corresponding user action. Failures
//! are logged and otherwise ignored; preferences are never worth crashing
//! over.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Cosmetic toggle for decorated card frames.
pub const GLASS_ENABLED_KEY: &str = "glassmorphism_enabled";
/// Remembers that the one-time small-terminal warning was dismissed.
pub const SMALL_TERMINAL_ACCEPTED_KEY: &str = "mobile_warning_accepted";

/// String key-value store persisted as JSON.
#[derive(Debug)]
pub struct PrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PrefStore {
    /// Preferences file in the user config directory, falling back to the
    /// current directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("prepdeck")
            .join("prefs.json")
    }

    /// Open the store, reading the file once. A missing or corrupt file
    /// yields an empty store.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(payload) => serde_json::from_str(&payload).unwrap_or_else(|e| {
                tracing::warn!("Ignoring corrupt preferences file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether a flag is set to the string `"true"`.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Set a value and persist immediately.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
        self.persist();
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::error!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.values) {
            Ok(payload) => {
                if let Err(e) = std::fs::write(&self.path, payload) {
                    tracing::error!("Failed to write {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::error!("Failed to encode preferences: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("prepdeck-prefs-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let store = PrefStore::open(temp_path("missing-never-created"));
        assert_eq!(store.get(GLASS_ENABLED_KEY), None);
        assert!(!store.get_bool(GLASS_ENABLED_KEY));
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let path = temp_path("roundtrip");
        std::fs::remove_file(&path).ok();

        let mut store = PrefStore::open(path.clone());
        store.set_bool(SMALL_TERMINAL_ACCEPTED_KEY, true);
        store.set(GLASS_ENABLED_KEY, "false");

        let reopened = PrefStore::open(path.clone());
        assert!(reopened.get_bool(SMALL_TERMINAL_ACCEPTED_KEY));
        assert_eq!(reopened.get(GLASS_ENABLED_KEY), Some("false"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json").unwrap();

        let store = PrefStore::open(path.clone());
        assert_eq!(store.get(GLASS_ENABLED_KEY), None);

        std::fs::remove_file(&path).ok();
    }
}
