//! Failure classes for the copy action and the settings store.
//!
//! Every copy failure is terminal for a single invocation: it is reported through the
//! notification sink and never retried. Settings failures are surfaced to whoever asked for
//! the load or save.

use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Why a copy invocation produced no clipboard write.
pub enum CopyError {
    /// The host has no document open, so there are no lines to scan.
    #[error("no active document")]
    NoActiveDocument,
    /// No heading exists at or above the line the scan started from.
    #[error("no heading found at or above line {line}")]
    NotFound {
        /// Zero-indexed line the upward scan started from.
        line: usize,
    },
    /// The clipboard sink refused the text.
    #[error("clipboard write failed: {0}")]
    ClipboardWriteFailed(String),
}

#[derive(Debug, Error)]
/// Failure reading or writing persisted plugin settings.
pub enum SettingsError {
    /// The backing file could not be read or written.
    #[error("settings I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The stored record is not valid settings JSON.
    #[error("settings data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CopyError {
    #[must_use]
    /// Message shown to the user when this failure ends a copy.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::NoActiveDocument => "No active editor",
            Self::NotFound { .. } => "No heading found at or above the cursor",
            Self::ClipboardWriteFailed(_) => "Failed to copy heading path",
        }
    }
}
