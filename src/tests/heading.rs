use super::{recognize, DeepMarkers, Heading};
use crate::formats::markdown::MarkdownFormat;

fn md(line: &str) -> Option<(usize, &str)> {
    recognize(line, &MarkdownFormat, DeepMarkers::Strip)
}

#[test]
fn test_levels_one_to_six() {
    assert_eq!(md("# One"), Some((1, "One")));
    assert_eq!(md("### Three"), Some((3, "Three")));
    assert_eq!(md("###### Six"), Some((6, "Six")));
}

#[test]
fn test_whitespace_after_markers_is_optional() {
    assert_eq!(md("#Title"), Some((1, "Title")));
    assert_eq!(md("##\tTabbed"), Some((2, "Tabbed")));
    assert_eq!(md("#   Spaced out   "), Some((1, "Spaced out")));
}

#[test]
fn test_marker_only_line_has_empty_text() {
    assert_eq!(md("#"), Some((1, "")));
    assert_eq!(md("##   "), Some((2, "")));
}

#[test]
fn test_non_headings() {
    assert_eq!(md(""), None);
    assert_eq!(md("plain text"), None);
    assert_eq!(md(" # indented"), None);
    assert_eq!(md("text # not at start"), None);
}

#[test]
fn test_markers_after_gap_belong_to_text() {
    assert_eq!(md("# # hash"), Some((1, "# hash")));
    assert_eq!(md("## C# notes"), Some((2, "C# notes")));
}

#[test]
fn test_deep_markers_strip() {
    assert_eq!(md("####### Seven"), Some((6, "Seven")));
    assert_eq!(md("#########"), Some((6, "")));
}

#[test]
fn test_deep_markers_keep_surplus_in_text() {
    let keep = |line| recognize(line, &MarkdownFormat, DeepMarkers::Keep);
    assert_eq!(keep("####### Seven"), Some((6, "# Seven")));
    assert_eq!(keep("########Eight"), Some((6, "##Eight")));
    assert_eq!(keep("#######"), Some((6, "#")));
    assert_eq!(keep("###### Six"), Some((6, "Six")));
}

#[test]
fn test_deep_markers_ignore() {
    assert_eq!(
        recognize("####### Seven", &MarkdownFormat, DeepMarkers::Ignore),
        None
    );
    assert_eq!(
        recognize("###### Six", &MarkdownFormat, DeepMarkers::Ignore),
        Some((6, "Six"))
    );
}

#[test]
fn test_unicode_text() {
    assert_eq!(md("## Überblick — café"), Some((2, "Überblick — café")));
}

#[test]
fn test_parse_records_line() {
    let heading = Heading::parse("## B", 7, &MarkdownFormat, DeepMarkers::default()).unwrap();
    assert_eq!(
        heading,
        Heading {
            level: 2,
            text: "B".to_string(),
            line: 7,
        }
    );
}
