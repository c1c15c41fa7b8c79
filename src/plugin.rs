//! Plugin lifecycle: settings loaded once at startup, commands dispatched, settings saved on
//! every change.
//!
//! Settings flow one way. The settings panel calls [`HeadingPathPlugin::update_settings`], which
//! mutates the in-memory record and writes it to the store; the next command invocation reads the
//! record by reference. Nothing reads the store back while a command is running.

use crate::command::{copy_heading_path, CommandSpec, COPY_COMMAND};
use crate::error::{CopyError, SettingsError};
use crate::formats::markdown::MarkdownFormat;
use crate::host::{ActiveEditor, Clipboard, Notifier, SettingsStore};
use crate::settings::Settings;

/// Every command the plugin registers with the host.
pub const COMMANDS: &[CommandSpec] = &[COPY_COMMAND];

/// The loaded plugin: current settings plus the store they persist to.
pub struct HeadingPathPlugin<S: SettingsStore> {
    settings: Settings,
    store: S,
    developer_mode: bool,
}

impl<S: SettingsStore> HeadingPathPlugin<S> {
    #[must_use]
    /// Loads settings from `store`, merging stored values over the defaults.
    ///
    /// A store that cannot be read is logged and the defaults are used; the plugin still loads.
    pub fn load(store: S, developer_mode: bool) -> Self {
        if developer_mode {
            tracing::info!("loading heading path plugin in developer mode");
        }

        let settings = match store.load_data() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load settings, using defaults");
                Settings::default()
            }
        };
        tracing::debug!(?settings, "settings loaded");

        Self {
            settings,
            store,
            developer_mode,
        }
    }

    #[must_use]
    /// Shuts the plugin down, handing the store back to the host.
    pub fn unload(self) -> S {
        if self.developer_mode {
            tracing::info!("unloading heading path plugin");
        }
        self.store
    }

    #[must_use]
    /// The settings in force for the next command.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies `change` to the settings and saves the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the save. The in-memory change is kept, so the
    /// next command still sees what the user chose.
    pub fn update_settings(
        &mut self,
        change: impl FnOnce(&mut Settings),
    ) -> Result<(), SettingsError> {
        change(&mut self.settings);
        tracing::debug!(settings = ?self.settings, "saving settings");
        self.store.save_data(&self.settings)
    }

    /// Resets every setting to its default and saves.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the save.
    pub fn reset_settings(&mut self) -> Result<(), SettingsError> {
        self.update_settings(|settings| *settings = Settings::default())
    }

    /// Runs the copy command against the active editor.
    ///
    /// # Errors
    ///
    /// See [`copy_heading_path`]; the user has already been notified of any failure.
    pub fn copy(
        &self,
        editor: Option<&dyn ActiveEditor>,
        clipboard: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> Result<String, CopyError> {
        copy_heading_path(editor, &MarkdownFormat, &self.settings, clipboard, notifier)
    }

    /// Dispatches the command registered as `id`.
    ///
    /// Returns `None` when no command has that id.
    pub fn run_command(
        &self,
        id: &str,
        editor: Option<&dyn ActiveEditor>,
        clipboard: &mut dyn Clipboard,
        notifier: &mut dyn Notifier,
    ) -> Option<Result<String, CopyError>> {
        if id == COPY_COMMAND.id {
            Some(self.copy(editor, clipboard, notifier))
        } else {
            tracing::warn!(id, "unknown command");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/plugin.rs"]
mod tests;
