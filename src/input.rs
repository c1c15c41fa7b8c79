//! Documents opened from disk for the CLI host.
//!
//! The CLI has no editor, so it plays one: a file is read whole, split into lines, and given a
//! cursor position from the command line.

use crate::host::{ActiveEditor, LineBuffer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
/// An in-memory document with a cursor, standing in for the host's active editor.
pub struct Document {
    /// Where the text came from, if it was read from disk.
    pub path: Option<PathBuf>,
    /// Document lines without terminators.
    pub lines: Vec<String>,
    /// Zero-indexed cursor line.
    pub cursor: usize,
}

impl Document {
    #[must_use]
    /// Builds a document from raw text with the cursor on `cursor`.
    pub fn from_text(text: &str, cursor: usize) -> Self {
        Self {
            path: None,
            lines: text.lines().map(str::to_string).collect(),
            cursor,
        }
    }

    /// Reads `path` into a document with the cursor on `cursor`.
    ///
    /// When `cursor` is `None` it is placed on the last line, which makes the copied path the
    /// heading chain in force at the end of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn open(path: &Path, cursor: Option<usize>) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut document = Self::from_text(&text, 0);
        document.cursor = cursor.unwrap_or_else(|| document.lines.len().saturating_sub(1));
        document.path = Some(path.to_path_buf());
        Ok(document)
    }
}

impl LineBuffer for Document {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl ActiveEditor for Document {
    fn cursor_line(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
