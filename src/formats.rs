//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the lexical markers a document
//! format uses for headings and inline math, so the recognizer and the normalizer never hard-code
//! Markdown's `#` and `$`.

pub mod markdown;

/// Lexical markers that identify headings and math spans in a line-oriented document.
pub trait Format {
    /// Character repeated at column 0 to mark a heading; the run length is the level.
    fn heading_marker(&self) -> char;
    /// Deepest heading level the format defines.
    fn max_level(&self) -> usize;
    /// Single character that opens and closes an inline math span.
    fn math_delimiter(&self) -> char;
}
