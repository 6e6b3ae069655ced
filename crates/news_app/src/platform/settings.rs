//! Key-value store for the two query settings, persisted as RON.

use std::path::{Path, PathBuf};

use news_core::QuerySettings;
use news_engine::StoredFile;
use news_logging::{news_debug, news_error, news_info, news_warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = ".news_settings.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedSettings {
    #[serde(default)]
    order_by: Option<String>,
    #[serde(default)]
    page_size: Option<String>,
}

pub(crate) struct SettingsStore {
    file: StoredFile,
}

impl SettingsStore {
    pub(crate) fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            file: StoredFile::new(dir.as_ref().join(SETTINGS_FILENAME)),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        self.file.path()
    }

    /// Missing keys, a missing file or an unreadable file fall back to defaults.
    pub(crate) fn load(&self) -> QuerySettings {
        let path = self.path();
        let content = match self.file.read() {
            Ok(Some(text)) => text,
            Ok(None) => return QuerySettings::default(),
            Err(err) => {
                news_warn!("Failed to read settings from {:?}: {}", path, err);
                return QuerySettings::default();
            }
        };

        let persisted: PersistedSettings = match ron::from_str(&content) {
            Ok(persisted) => persisted,
            Err(err) => {
                news_warn!("Failed to parse settings from {:?}: {}", path, err);
                return QuerySettings::default();
            }
        };

        let defaults = QuerySettings::default();
        let settings = QuerySettings {
            order_by: persisted.order_by.unwrap_or(defaults.order_by),
            page_size: persisted.page_size.unwrap_or(defaults.page_size),
        };
        news_info!("Loaded settings from {:?}: {:?}", path, settings);
        settings
    }

    pub(crate) fn save(&self, settings: &QuerySettings) {
        let persisted = PersistedSettings {
            order_by: Some(settings.order_by.clone()),
            page_size: Some(settings.page_size.clone()),
        };

        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&persisted, pretty) {
            Ok(text) => text,
            Err(err) => {
                news_error!("Failed to serialize settings: {}", err);
                return;
            }
        };

        match self.file.replace(&content) {
            Ok(()) => news_debug!("Saved settings to {:?}", self.path()),
            Err(err) => news_error!("Failed to write settings to {:?}: {}", self.path(), err),
        }
    }
}

pub(crate) fn default_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::new(temp.path());
        assert_eq!(store.load(), QuerySettings::default());
    }

    #[test]
    fn saved_settings_are_loaded_back() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::new(temp.path());
        let settings = QuerySettings {
            order_by: "relevance".to_string(),
            page_size: "42".to_string(),
        };

        store.save(&settings);
        assert!(store.path().exists());
        assert_eq!(SettingsStore::new(temp.path()).load(), settings);
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::new(temp.path());
        fs::write(store.path(), "(page_size: Some(\"7\"))").unwrap();

        let settings = store.load();
        assert_eq!(settings.order_by, "newest");
        assert_eq!(settings.page_size, "7");
    }

    #[test]
    fn corrupt_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let store = SettingsStore::new(temp.path());
        fs::write(store.path(), "not ron at all {").unwrap();

        assert_eq!(store.load(), QuerySettings::default());
    }
}
