//! User-facing settings and their persistence.
//!
//! The record is small and stored as JSON. Stored data is merged over the defaults, so a file
//! written by an older version (or edited by hand) with keys missing still loads, and unknown
//! keys are ignored.

use crate::error::SettingsError;
use crate::heading::DeepMarkers;
use crate::host::SettingsStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Separator used until the user picks another.
pub const DEFAULT_SEPARATOR: &str = ">";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
/// Preferences that shape the copied heading path.
pub struct Settings {
    /// Text placed between consecutive headings in the path.
    pub separator: String,
    /// Rewrite inline math in heading text to plain text before joining.
    pub normalize_math: bool,
    /// Policy for marker runs deeper than the format allows.
    pub deep_markers: DeepMarkers,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            normalize_math: false,
            deep_markers: DeepMarkers::default(),
        }
    }
}

impl Settings {
    #[must_use]
    /// Copy of these settings with any given values replaced; `None` keeps the current value.
    pub fn with_overrides(&self, separator: Option<String>, normalize_math: Option<bool>) -> Self {
        Self {
            separator: separator.unwrap_or_else(|| self.separator.clone()),
            normalize_math: normalize_math.unwrap_or(self.normalize_math),
            deep_markers: self.deep_markers,
        }
    }
}

/// Settings persisted as a pretty-printed JSON file.
pub struct JsonFileStore {
    /// Location of the JSON file.
    pub path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    /// Store backed by the file at `path` (created on first save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for JsonFileStore {
    fn load_data(&self) -> Result<Option<Settings>, SettingsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save_data(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[derive(Default)]
/// Settings kept only in memory, for hosts without a data directory.
pub struct MemoryStore {
    /// Last saved record.
    pub saved: Option<Settings>,
    /// Number of saves performed.
    pub saves: usize,
}

impl SettingsStore for MemoryStore {
    fn load_data(&self) -> Result<Option<Settings>, SettingsError> {
        Ok(self.saved.clone())
    }

    fn save_data(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        self.saved = Some(settings.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod tests;
