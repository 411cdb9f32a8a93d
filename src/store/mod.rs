//! Settings and high-score persistence
//!
//! The game core never touches storage; the host reads the save at startup
//! and writes through this interface when a score or setting changes.

mod json;
mod settings;

use thiserror::Error;

pub use json::JsonStore;
pub use settings::{LANGUAGES, Settings};

/// Save store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Record store for the high score and user settings
///
/// Readers return `None` when nothing has been saved yet. Writers replace the
/// stored record; the write-if-greater high-score policy is the caller's.
pub trait SaveStore {
    /// The saved high score, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the save cannot be read.
    fn high_score(&self) -> Result<Option<u32>, StoreError>;

    /// Replace the saved high score
    ///
    /// # Errors
    /// Returns `StoreError` if the save cannot be written.
    fn insert_high_score(&mut self, score: u32) -> Result<(), StoreError>;

    /// The saved settings, if any
    ///
    /// # Errors
    /// Returns `StoreError` if the save cannot be read.
    fn settings(&self) -> Result<Option<Settings>, StoreError>;

    /// Replace the saved settings
    ///
    /// # Errors
    /// Returns `StoreError` if the save cannot be written.
    fn insert_settings(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Persist a round score under the write-if-greater policy
///
/// Returns the high score after the call: unchanged unless `score` beats it.
///
/// # Errors
/// Returns `StoreError` if the new high score cannot be written.
pub fn record_score(
    store: &mut dyn SaveStore,
    known_high: u32,
    score: u32,
) -> Result<u32, StoreError> {
    if score > known_high {
        store.insert_high_score(score)?;
        Ok(score)
    } else {
        Ok(known_high)
    }
}

/// In-memory store for tests and ephemeral runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    high_score: Option<u32>,
    settings: Option<Settings>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn high_score(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.high_score)
    }

    fn insert_high_score(&mut self, score: u32) -> Result<(), StoreError> {
        self.high_score = Some(score);
        Ok(())
    }

    fn settings(&self) -> Result<Option<Settings>, StoreError> {
        Ok(self.settings.clone())
    }

    fn insert_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = Some(settings.clone());
        Ok(())
    }
}
