//! Capabilities the host application lends to the plugin.
//!
//! The core never reaches for an editor, a clipboard or a data directory on its own: everything
//! it touches arrives through these traits, so the same code runs under the CLI and under the
//! in-memory fakes the tests use.

use crate::error::SettingsError;
use crate::settings::Settings;
use std::fmt;

/// Read-only, zero-indexed access to the lines of a document.
pub trait LineBuffer {
    /// Number of lines in the document.
    fn line_count(&self) -> usize;
    /// Text of line `index`, without its line terminator.
    fn line(&self, index: usize) -> Option<&str>;
}

/// The document the user is looking at, with a cursor in it.
pub trait ActiveEditor: LineBuffer {
    /// Zero-indexed line holding the cursor.
    fn cursor_line(&self) -> usize;
}

impl<S: AsRef<str>> LineBuffer for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> LineBuffer for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reason a clipboard sink gave for refusing a write.
pub struct ClipboardRejected(pub String);

impl fmt::Display for ClipboardRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Destination for copied text.
pub trait Clipboard {
    /// Places `text` on the clipboard, replacing what was there.
    ///
    /// # Errors
    ///
    /// Returns the sink's reason when the write is refused; nothing is written in that case.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardRejected>;
}

/// Fire-and-forget user feedback.
pub trait Notifier {
    /// Shows `message` to the user for roughly `duration_ms` milliseconds.
    fn notify(&mut self, message: &str, duration_ms: u64);
}

/// Persistence for the plugin's settings record.
pub trait SettingsStore {
    /// Reads the stored record, or `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record exists but cannot be read or decoded.
    fn load_data(&self) -> Result<Option<Settings>, SettingsError>;

    /// Replaces the stored record with `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save_data(&mut self, settings: &Settings) -> Result<(), SettingsError>;
}

/// Clipboard backed by the operating system's clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connects to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns the platform's reason when no clipboard is reachable (e.g. no display server).
    pub fn new() -> Result<Self, ClipboardRejected> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardRejected(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardRejected> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardRejected(e.to_string()))
    }
}

/// Clipboard stand-in that prints the copied text on stdout.
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardRejected> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}").map_err(|e| ClipboardRejected(e.to_string()))
    }
}

/// Notifier that writes notices to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str, duration_ms: u64) {
        tracing::debug!(duration_ms, "notice shown");
        eprintln!("{message}");
    }
}
