use super::{copy_heading_path, COPIED_NOTICE, COPY_COMMAND, NOTICE_DURATION_MS};
use crate::error::CopyError;
use crate::formats::markdown::MarkdownFormat;
use crate::host::ActiveEditor;
use crate::input::Document;
use crate::settings::Settings;
use crate::test_helpers::{FakeClipboard, RecordingNotifier};

fn document(text: &str, cursor: usize) -> Document {
    Document::from_text(text, cursor)
}

#[test]
fn test_copy_writes_path_and_notifies() {
    let doc = document("# A\n## B\ntext\n### C\n", 3);
    let mut clipboard = FakeClipboard::default();
    let mut notifier = RecordingNotifier::default();

    let copied = copy_heading_path(
        Some(&doc as &dyn ActiveEditor),
        &MarkdownFormat,
        &Settings::default(),
        &mut clipboard,
        &mut notifier,
    )
    .unwrap();

    assert_eq!(copied, "A>B>C");
    assert_eq!(clipboard.text.as_deref(), Some("A>B>C"));
    assert_eq!(
        notifier.notices,
        vec![(COPIED_NOTICE.to_string(), NOTICE_DURATION_MS)]
    );
}

#[test]
fn test_copy_uses_settings_passed_in() {
    let doc = document("# $x_1$\n## B", 1);
    let settings = Settings {
        separator: " :: ".to_string(),
        normalize_math: true,
        ..Settings::default()
    };
    let mut clipboard = FakeClipboard::default();
    let mut notifier = RecordingNotifier::default();

    copy_heading_path(
        Some(&doc as &dyn ActiveEditor),
        &MarkdownFormat,
        &settings,
        &mut clipboard,
        &mut notifier,
    )
    .unwrap();

    assert_eq!(clipboard.text.as_deref(), Some("x_(1) :: B"));
}

#[test]
fn test_no_active_document() {
    let mut clipboard = FakeClipboard::default();
    let mut notifier = RecordingNotifier::default();

    let err = copy_heading_path(
        None,
        &MarkdownFormat,
        &Settings::default(),
        &mut clipboard,
        &mut notifier,
    )
    .unwrap_err();

    assert_eq!(err, CopyError::NoActiveDocument);
    assert!(clipboard.text.is_none());
    assert_eq!(notifier.messages(), vec!["No active editor"]);
}

#[test]
fn test_not_found_writes_nothing() {
    let doc = document("line one\nline two", 1);
    let mut clipboard = FakeClipboard::default();
    let mut notifier = RecordingNotifier::default();

    let err = copy_heading_path(
        Some(&doc as &dyn ActiveEditor),
        &MarkdownFormat,
        &Settings::default(),
        &mut clipboard,
        &mut notifier,
    )
    .unwrap_err();

    assert_eq!(err, CopyError::NotFound { line: 1 });
    assert!(clipboard.text.is_none());
    assert_eq!(
        notifier.messages(),
        vec!["No heading found at or above the cursor"]
    );
}

#[test]
fn test_clipboard_failure_is_reported() {
    let doc = document("# A", 0);
    let mut clipboard = FakeClipboard::refusing();
    let mut notifier = RecordingNotifier::default();

    let err = copy_heading_path(
        Some(&doc as &dyn ActiveEditor),
        &MarkdownFormat,
        &Settings::default(),
        &mut clipboard,
        &mut notifier,
    )
    .unwrap_err();

    assert_eq!(
        err,
        CopyError::ClipboardWriteFailed("clipboard unavailable".to_string())
    );
    assert_eq!(notifier.messages(), vec!["Failed to copy heading path"]);
}

#[test]
fn test_each_invocation_notifies_once() {
    let doc = document("# A\n## B", 1);
    let mut clipboard = FakeClipboard::default();
    let mut notifier = RecordingNotifier::default();

    for _ in 0..3 {
        copy_heading_path(
            Some(&doc as &dyn ActiveEditor),
            &MarkdownFormat,
            &Settings::default(),
            &mut clipboard,
            &mut notifier,
        )
        .unwrap();
    }

    assert_eq!(notifier.notices.len(), 3);
}

#[test]
fn test_copy_command_identity() {
    assert_eq!(COPY_COMMAND.id, "copy");
    assert_eq!(COPY_COMMAND.name, "Copy");
}
