//! heading-path: copy the Markdown heading chain above the cursor as a breadcrumb.
//!
//! The core is two pure pieces, the [`resolver`] that walks upward from a line collecting
//! ancestor headings and the [`math`] normalizer that turns inline `$...$` markup into plain text.
//! Everything the host application provides (the open document, the clipboard, notices, settings
//! storage) comes in through the traits in [`host`].
#![allow(clippy::multiple_crate_versions)]

pub mod command;
pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod host;
pub mod input;
pub mod math;
pub mod plugin;
pub mod resolver;
pub mod settings;

#[cfg(test)]
mod test_helpers;
