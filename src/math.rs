//! Plain-text rendering of inline math in heading text.
//!
//! Headings like `## Proof that $\mathbb{R}_{n,m}$ is complete` make unreadable breadcrumbs when
//! copied verbatim. Each `$...$` span is rewritten by a small recursive-descent parser:
//!
//! - text-style commands (`\text{..}`, `\mathbf{..}`, ...) keep only their argument;
//! - every other `\command` is dropped together with the whitespace after it;
//! - braces become parentheses;
//! - subscripts `_c` and `_{..}` become `_(..)`, recursively, with commas at the top level of a
//!   subscript rendered as `", "`.
//!
//! Text outside spans is left alone, and an unpaired delimiter leaves the rest of the text as it
//! was. Groups nested deeper than [`MAX_DEPTH`] are not rewritten: from the group that crosses
//! the limit, the rest of the span is copied through verbatim.

use std::iter::Peekable;
use std::str::Chars;

/// Commands whose argument is kept as plain text.
const TEXT_COMMANDS: &[&str] = &[
    "text",
    "textbf",
    "textit",
    "textrm",
    "textsf",
    "texttt",
    "mathrm",
    "mathbf",
    "mathit",
    "mathsf",
    "mathtt",
    "mathcal",
    "mathbb",
    "mathfrak",
    "operatorname",
];

/// Deepest group nesting rewritten inside one span.
pub const MAX_DEPTH: usize = 256;

#[must_use]
/// Rewrites every `$...$` span in `text` to plain text.
pub fn normalize(text: &str) -> String {
    normalize_delimited(text, '$')
}

#[must_use]
/// Rewrites every span between pairs of `delimiter` in `text` to plain text.
///
/// Spans are matched left to right, each closing at the next delimiter. The delimiters
/// themselves are removed.
pub fn normalize_delimited(text: &str, delimiter: char) -> String {
    let width = delimiter.len_utf8();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(delimiter) {
        let inner = &rest[open + width..];
        let Some(close) = inner.find(delimiter) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&rewrite_span(&inner[..close]));
        rest = &inner[close + width..];
    }

    out.push_str(rest);
    out
}

fn rewrite_span(span: &str) -> String {
    let mut parser = SpanParser {
        chars: span.chars().peekable(),
        depth: 0,
    };
    parser.sequence(Context::Span).0
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Top level of a math span.
    Span,
    /// Inside a plain `{...}` group or a command argument.
    Group,
    /// Directly inside a `_{...}` group.
    Subscript,
}

struct SpanParser<'a> {
    chars: Peekable<Chars<'a>>,
    depth: usize,
}

impl SpanParser<'_> {
    /// Parses up to the end of the span, or up to and including the `}` closing the current
    /// group. The flag reports whether a closing brace was found.
    fn sequence(&mut self, context: Context) -> (String, bool) {
        let mut out = String::new();

        while let Some(ch) = self.chars.next() {
            match ch {
                '}' if context != Context::Span => return (out, true),
                '}' => out.push(')'),
                '{' => match self.nested(Context::Group) {
                    Some((body, closed)) => push_group(&mut out, "(", &body, closed),
                    None => self.copy_rest(&mut out, "{"),
                },
                '\\' => self.command(&mut out),
                '_' => self.subscript(&mut out),
                ',' if context == Context::Subscript => {
                    out.push_str(", ");
                    self.skip_whitespace();
                }
                _ => out.push(ch),
            }
        }

        (out, false)
    }

    fn command(&mut self, out: &mut String) {
        let mut name = String::new();
        while let Some(c) = self.chars.next_if(char::is_ascii_alphabetic) {
            name.push(c);
        }

        if name.is_empty() {
            out.push('\\');
            return;
        }

        if TEXT_COMMANDS.contains(&name.as_str()) && self.chars.next_if_eq(&'{').is_some() {
            match self.nested(Context::Group) {
                Some((body, _)) => out.push_str(&body),
                None => self.copy_rest(out, &format!("\\{name}{{")),
            }
            return;
        }

        self.skip_whitespace();
    }

    fn subscript(&mut self, out: &mut String) {
        if self.chars.next_if_eq(&'{').is_some() {
            match self.nested(Context::Subscript) {
                Some((body, closed)) => push_group(out, "_(", &body, closed),
                None => self.copy_rest(out, "_{"),
            }
        } else if let Some(token) = self.chars.next_if(|c| c.is_alphanumeric()) {
            out.push_str("_(");
            out.push(token);
            out.push(')');
        } else {
            out.push('_');
        }
    }

    /// Parses one nested group, or returns `None` once the nesting limit is reached.
    fn nested(&mut self, context: Context) -> Option<(String, bool)> {
        if self.depth >= MAX_DEPTH {
            return None;
        }
        self.depth += 1;
        let group = self.sequence(context);
        self.depth -= 1;
        Some(group)
    }

    /// Copies `opening` and everything left in the span without rewriting it.
    fn copy_rest(&mut self, out: &mut String, opening: &str) {
        out.push_str(opening);
        out.extend(self.chars.by_ref());
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }
}

fn push_group(out: &mut String, open: &str, body: &str, closed: bool) {
    out.push_str(open);
    out.push_str(body);
    if closed {
        out.push(')');
    }
}

#[cfg(test)]
#[path = "tests/math.rs"]
mod tests;
