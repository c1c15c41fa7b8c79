//! In-memory stand-ins for the host capabilities, used by unit tests.

use crate::error::SettingsError;
use crate::host::{Clipboard, ClipboardRejected, Notifier, SettingsStore};
use crate::settings::Settings;

#[derive(Default)]
/// Clipboard that remembers what was written, or refuses every write.
pub struct FakeClipboard {
    pub text: Option<String>,
    pub refuse: bool,
}

impl FakeClipboard {
    pub fn refusing() -> Self {
        Self {
            text: None,
            refuse: true,
        }
    }
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardRejected> {
        if self.refuse {
            return Err(ClipboardRejected("clipboard unavailable".to_string()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
/// Notifier that records every notice.
pub struct RecordingNotifier {
    pub notices: Vec<(String, u64)>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|(m, _)| m.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, duration_ms: u64) {
        self.notices.push((message.to_string(), duration_ms));
    }
}

/// Store whose reads always fail, as if the data file were corrupt.
pub struct BrokenStore;

impl SettingsStore for BrokenStore {
    fn load_data(&self) -> Result<Option<Settings>, SettingsError> {
        Err(serde_json::from_str::<Settings>("{").unwrap_err().into())
    }

    fn save_data(&mut self, _settings: &Settings) -> Result<(), SettingsError> {
        Err(std::io::Error::other("read-only store").into())
    }
}
