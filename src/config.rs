//! Configuration for the command-line host, separate from the plugin's own settings.
//!
//! Specifically, we try to find a heading-path.toml, and if present we load settings from there.
//! This decides whether developer logging is on and where the plugin settings are stored.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "heading-path.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Host preferences loaded from heading-path.toml or falling back to defaults.
pub struct Config {
    #[facet(default = false)]
    /// Log plugin lifecycle and resolver decisions.
    pub developer_mode: bool,
    #[facet(default = ".heading-path.json".to_string())]
    /// JSON file the plugin settings are saved to.
    pub data_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            developer_mode: false,
            data_file: ".heading-path.json".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from heading-path.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match facet_toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring bad config"),
            }
        }
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
