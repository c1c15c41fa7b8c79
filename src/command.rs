//! The user-invocable copy action.
//!
//! One invocation reads the active editor once, resolves the heading path above the cursor,
//! writes it to the clipboard and tells the user how it went. Every failure ends the invocation
//! and is reported through the notifier; nothing is retried.

use crate::error::CopyError;
use crate::formats::Format;
use crate::host::{ActiveEditor, Clipboard, Notifier};
use crate::resolver::Resolver;
use crate::settings::Settings;

/// How long notices stay on screen.
pub const NOTICE_DURATION_MS: u64 = 4000;

/// Notice shown after a successful copy.
pub const COPIED_NOTICE: &str = "Heading path copied to clipboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A command registered with the host, which decides how the user triggers it.
pub struct CommandSpec {
    /// Stable identifier the host binds shortcuts to.
    pub id: &'static str,
    /// Name shown in the host's command list.
    pub name: &'static str,
}

/// Copies the heading path above the cursor.
pub const COPY_COMMAND: CommandSpec = CommandSpec {
    id: "copy",
    name: "Copy",
};

/// Copies the heading path above the cursor of `editor` and reports the outcome.
///
/// Returns the copied text on success.
///
/// # Errors
///
/// Returns [`CopyError::NoActiveDocument`] when `editor` is `None`, [`CopyError::NotFound`] when
/// no heading sits at or above the cursor, and [`CopyError::ClipboardWriteFailed`] when the
/// clipboard refuses the text. The user has already been notified in each case.
pub fn copy_heading_path(
    editor: Option<&dyn ActiveEditor>,
    format: &dyn Format,
    settings: &Settings,
    clipboard: &mut dyn Clipboard,
    notifier: &mut dyn Notifier,
) -> Result<String, CopyError> {
    let outcome = resolve_and_write(editor, format, settings, clipboard);

    match &outcome {
        Ok(path) => {
            tracing::info!(path = %path, "heading path copied");
            notifier.notify(COPIED_NOTICE, NOTICE_DURATION_MS);
        }
        Err(e) => {
            tracing::warn!(error = %e, "copy failed");
            notifier.notify(e.notice(), NOTICE_DURATION_MS);
        }
    }

    outcome
}

fn resolve_and_write(
    editor: Option<&dyn ActiveEditor>,
    format: &dyn Format,
    settings: &Settings,
    clipboard: &mut dyn Clipboard,
) -> Result<String, CopyError> {
    let editor = editor.ok_or(CopyError::NoActiveDocument)?;
    let path = Resolver::new(format, settings).resolve(editor, editor.cursor_line())?;
    clipboard
        .write_text(&path)
        .map_err(|e| CopyError::ClipboardWriteFailed(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "tests/command.rs"]
mod tests;
