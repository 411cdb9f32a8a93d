//! File-backed save store
//!
//! The whole save state lives in one small JSON document that is rewritten on
//! every change. A missing file reads as an empty save.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{SaveStore, Settings, StoreError};

/// Serialized shape of the save file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SaveData {
    high_score: Option<u32>,
    settings: Option<Settings>,
}

/// JSON file implementation of [`SaveStore`]
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path
    ///
    /// The file is created lazily on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<SaveData, StoreError> {
        if !self.path.exists() {
            return Ok(SaveData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, data: &SaveData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SaveStore for JsonStore {
    fn high_score(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.load()?.high_score)
    }

    fn insert_high_score(&mut self, score: u32) -> Result<(), StoreError> {
        let mut data = self.load()?;
        data.high_score = Some(score);
        self.save(&data)
    }

    fn settings(&self) -> Result<Option<Settings>, StoreError> {
        Ok(self.load()?.settings)
    }

    fn insert_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let mut data = self.load()?;
        data.settings = Some(settings.clone());
        self.save(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> JsonStore {
        let path = env::temp_dir().join(format!(
            "wordle_game_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonStore::new(path)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = temp_store("missing");
        assert_eq!(store.high_score().unwrap(), None);
        assert_eq!(store.settings().unwrap(), None);
    }

    #[test]
    fn high_score_roundtrip() {
        let mut store = temp_store("score");
        store.insert_high_score(42).unwrap();
        assert_eq!(store.high_score().unwrap(), Some(42));

        store.insert_high_score(7).unwrap();
        // The store itself is a plain record store; the write-if-greater
        // policy lives in the host.
        assert_eq!(store.high_score().unwrap(), Some(7));

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn settings_roundtrip_preserves_high_score() {
        let mut store = temp_store("settings");
        store.insert_high_score(13).unwrap();

        let settings = Settings {
            dark_theme: false,
            language: "German".to_string(),
            notifications_enabled: false,
        };
        store.insert_settings(&settings).unwrap();

        assert_eq!(store.settings().unwrap(), Some(settings));
        assert_eq!(store.high_score().unwrap(), Some(13));

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(store.high_score(), Err(StoreError::Serde(_))));

        let _ = fs::remove_file(store.path());
    }
}
