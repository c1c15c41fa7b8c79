//! Markdown format implementation.
//!
//! ATX-style headings (`#` through `######`) with `$...$` inline math, as written in most
//! note-taking vaults.

use crate::formats::Format;

/// Markers for ATX-style markdown headings (# syntax) and dollar-delimited math.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading_marker(&self) -> char {
        '#'
    }

    fn max_level(&self) -> usize {
        6
    }

    fn math_delimiter(&self) -> char {
        '$'
    }
}
