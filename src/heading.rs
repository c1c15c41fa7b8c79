//! Heading recognition for single lines of a document.
//!
//! A heading is a line that begins (at column 0) with a run of the format's marker character,
//! optionally followed by whitespace, with the rest of the line as its text. The recognizer is a
//! two-state scanner rather than a pattern so that the awkward cases stay visible: a marker-only
//! line is a heading with empty text, an indented marker is not a heading, and a marker run
//! longer than the format allows is handled by an explicit [`DeepMarkers`] policy.

use crate::formats::Format;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
/// What to do with a marker run longer than the format's deepest heading level.
pub enum DeepMarkers {
    /// Heading at the deepest level; markers past that level stay in the text
    /// (`####### Seven` reads as level 6 `# Seven`).
    #[default]
    Keep,
    /// Heading at the deepest level with every marker dropped from the text.
    #[serde(alias = "clamp")]
    #[value(alias = "clamp")]
    Strip,
    /// Do not treat the line as a heading at all.
    Ignore,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found on one line of a buffer.
pub struct Heading {
    /// Nesting depth (1 for top-level).
    pub level: usize,
    /// Heading text without markers or surrounding whitespace.
    pub text: String,
    /// Zero-indexed line the heading sits on.
    pub line: usize,
}

impl Heading {
    #[must_use]
    /// Parses `text` as the heading on line `line`, if it is one.
    pub fn parse(text: &str, line: usize, format: &dyn Format, deep: DeepMarkers) -> Option<Self> {
        recognize(text, format, deep).map(|(level, text)| Self {
            level,
            text: text.to_string(),
            line,
        })
    }
}

enum Scan {
    Markers,
    Gap,
}

#[must_use]
/// Splits a heading line into its level and trimmed text.
///
/// Returns `None` for lines that do not start with the marker character, and for over-deep
/// marker runs under [`DeepMarkers::Ignore`].
pub fn recognize<'a>(
    line: &'a str,
    format: &dyn Format,
    deep: DeepMarkers,
) -> Option<(usize, &'a str)> {
    let marker = format.heading_marker();
    let mut level = 0;
    let mut text_start = line.len();
    let mut state = Scan::Markers;

    for (offset, ch) in line.char_indices() {
        state = match state {
            Scan::Markers if ch == marker => {
                level += 1;
                Scan::Markers
            }
            _ if level == 0 => return None,
            _ if ch.is_whitespace() => Scan::Gap,
            _ => {
                text_start = offset;
                break;
            }
        };
    }

    if level == 0 {
        return None;
    }

    let max = format.max_level();
    if level > max {
        match deep {
            DeepMarkers::Keep => text_start = max * marker.len_utf8(),
            DeepMarkers::Strip => {}
            DeepMarkers::Ignore => return None,
        }
        level = max;
    }

    Some((level, line[text_start..].trim_end()))
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
