//! Resolution of the heading chain above a line.
//!
//! Starting from a line, the resolver finds the nearest heading at or above it, then keeps
//! walking toward the top of the buffer collecting each heading whose level is strictly below
//! the lowest level seen so far. The result reads outermost first:
//!
//! ```text
//! # A          <- kept (level 1 < 2)
//! ## B         <- kept (level 2 < 3)
//! ### Other    <- skipped, a sibling of C
//! ### C        <- nearest heading
//! text         <- start line
//! ```
//!
//! The walk is a single monotonic pass; no line is read twice.

use crate::error::CopyError;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::heading::{recognize, Heading};
use crate::host::LineBuffer;
use crate::math;
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Headings from the outermost ancestor down to the heading nearest the start line.
pub struct HeadingPath {
    /// Chain of headings in document order; levels strictly increase along it.
    pub headings: Vec<Heading>,
}

impl HeadingPath {
    /// Heading texts in document order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.headings.iter().map(|heading| heading.text.as_str())
    }

    #[must_use]
    /// Joins the heading texts with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.segments().collect::<Vec<_>>().join(separator)
    }

    #[must_use]
    /// The heading the path ends at.
    pub fn nearest(&self) -> Option<&Heading> {
        self.headings.last()
    }
}

/// Finds heading paths in a buffer according to a format and the user's settings.
pub struct Resolver<'a> {
    format: &'a dyn Format,
    settings: &'a Settings,
}

impl<'a> Resolver<'a> {
    #[must_use]
    /// Resolver reading headings in `format`, shaped by `settings`.
    pub fn new(format: &'a dyn Format, settings: &'a Settings) -> Self {
        Self { format, settings }
    }

    /// Collects the heading chain that `start_line` sits under.
    ///
    /// A `start_line` past the end of the buffer is treated as the last line.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::NotFound`] if no heading exists at or above `start_line`.
    pub fn headings<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        start_line: usize,
    ) -> Result<HeadingPath, CopyError> {
        let not_found = CopyError::NotFound { line: start_line };
        let Some(last) = buffer.line_count().checked_sub(1) else {
            return Err(not_found);
        };

        let nearest = (0..=start_line.min(last))
            .rev()
            .find_map(|index| self.heading_at(buffer, index))
            .ok_or(not_found)?;
        tracing::debug!(line = nearest.line, level = nearest.level, "nearest heading");

        let mut level = nearest.level;
        let above = nearest.line;
        let mut headings = vec![nearest];

        for index in (0..above).rev() {
            if level == 1 {
                break;
            }
            let Some(line) = buffer.line(index) else {
                continue;
            };
            if let Some((found, raw)) = recognize(line, self.format, self.settings.deep_markers) {
                if found < level {
                    tracing::debug!(line = index, level = found, "ancestor heading");
                    headings.push(self.build(found, raw, index));
                    level = found;
                }
            }
        }

        headings.reverse();
        Ok(HeadingPath { headings })
    }

    /// Resolves the heading path above `start_line` and joins it with the configured separator.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::NotFound`] if no heading exists at or above `start_line`.
    pub fn resolve<B: LineBuffer + ?Sized>(
        &self,
        buffer: &B,
        start_line: usize,
    ) -> Result<String, CopyError> {
        self.headings(buffer, start_line)
            .map(|path| path.join(&self.settings.separator))
    }

    fn heading_at<B: LineBuffer + ?Sized>(&self, buffer: &B, index: usize) -> Option<Heading> {
        let line = buffer.line(index)?;
        let (level, raw) = recognize(line, self.format, self.settings.deep_markers)?;
        Some(self.build(level, raw, index))
    }

    fn build(&self, level: usize, raw: &str, line: usize) -> Heading {
        let text = if self.settings.normalize_math {
            math::normalize_delimited(raw, self.format.math_delimiter())
                .trim()
                .to_string()
        } else {
            raw.trim().to_string()
        };
        Heading { level, text, line }
    }
}

/// Resolves the Markdown heading path above `start_line` in `lines`.
///
/// # Errors
///
/// Returns [`CopyError::NotFound`] if no heading exists at or above `start_line`.
pub fn resolve_path<B: LineBuffer + ?Sized>(
    lines: &B,
    start_line: usize,
    settings: &Settings,
) -> Result<String, CopyError> {
    Resolver::new(&MarkdownFormat, settings).resolve(lines, start_line)
}

#[cfg(test)]
#[path = "tests/resolver.rs"]
mod tests;
