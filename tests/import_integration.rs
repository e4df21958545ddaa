//! Integration tests for the import flow across crates

use std::io::Write;

use docport::headless::runner::{import_once, run_headless};
use docport::headless::HeadlessEvent;
use docport::LaunchOptions;
use docport_app::message::Message;
use docport_app::process::process_message;
use docport_app::state::{AppState, UiMode};
use docport_app::{ContentFormat, InputKey};

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let key = if c == '\n' {
            InputKey::Enter
        } else {
            InputKey::Char(c)
        };
        process_message(state, Message::Key(key));
    }
}

fn event_json(event: &HeadlessEvent) -> String {
    serde_json::to_string(event).unwrap()
}

#[test]
fn test_keyboard_session_imports_markdown() {
    let mut state = AppState::new();

    process_message(&mut state, Message::Key(InputKey::Char('i')));
    type_text(&mut state, "# Plan\n- ship it");
    process_message(&mut state, Message::Key(InputKey::CharCtrl('s')));

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.document_text(), "# Plan\n- ship it");
    assert_eq!(state.last_import.as_ref().unwrap().format, ContentFormat::Markdown);
}

#[test]
fn test_error_then_retry_with_other_format() {
    let mut state = AppState::new();
    process_message(&mut state, Message::OpenImportDialog);
    process_message(&mut state, Message::Key(InputKey::Tab));
    process_message(
        &mut state,
        Message::Paste {
            text: "plain words".to_string(),
        },
    );

    process_message(&mut state, Message::Key(InputKey::CharCtrl('s')));
    let dialog = state.import_dialog.as_ref().unwrap();
    assert_eq!(
        dialog.last_error.as_deref(),
        Some("Invalid JSON format. Please check your input.")
    );
    assert_eq!(dialog.raw_text, "plain words");

    process_message(&mut state, Message::Key(InputKey::Tab));
    assert!(state.import_dialog.as_ref().unwrap().last_error.is_none());

    process_message(&mut state, Message::Key(InputKey::CharCtrl('s')));
    assert!(!state.is_import_dialog_open());
    assert_eq!(state.document_text(), "plain words");
}

#[test]
fn test_cancel_leaves_document_untouched() {
    let mut state = AppState::new();
    state.open_import_dialog_with(ContentFormat::Markdown, "first");
    process_message(&mut state, Message::SubmitImport);

    process_message(&mut state, Message::OpenImportDialog);
    type_text(&mut state, "second");
    process_message(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.document_text(), "first");
    assert!(!state.is_import_dialog_open());
}

#[test]
fn test_headless_event_lines() {
    insta::with_settings!({filters => vec![(r#""timestamp":\d+"#, r#""timestamp":"[ts]""#)]}, {
        insta::assert_snapshot!(
            event_json(&import_once(ContentFormat::Markdown, "# Hello")),
            @r##"{"event":"imported","format":"markdown","chars":7,"document":"# Hello","timestamp":"[ts]"}"##
        );
        insta::assert_snapshot!(
            event_json(&import_once(ContentFormat::Json, r#"{"type":"doc"}"#)),
            @r##"{"event":"imported","format":"json","chars":14,"document":{"type":"doc"},"timestamp":"[ts]"}"##
        );
        insta::assert_snapshot!(
            event_json(&import_once(ContentFormat::Json, "not json")),
            @r##"{"event":"import_failed","format":"json","error":"Invalid JSON format. Please check your input.","timestamp":"[ts]"}"##
        );
    });
}

#[test]
fn test_headless_run_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"type\": \"doc\", \"content\": []}}").unwrap();

    assert!(run_headless(ContentFormat::Json, Some(file.path())).unwrap());
    let missing = file.path().with_extension("missing");
    assert!(run_headless(ContentFormat::Json, Some(&missing)).is_err());
}

#[test]
fn test_launch_settings_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[import]\ndefault_format = \"json\"\ntextarea_rows = 4\n").unwrap();

    let options = LaunchOptions {
        config: Some(path),
        ..Default::default()
    };
    let settings = docport::app::resolve_settings(&options).unwrap();

    let mut state = AppState::with_settings(settings);
    state.open_import_dialog();
    assert_eq!(state.import_dialog.as_ref().unwrap().format, ContentFormat::Json);
    assert_eq!(state.settings.import.rows(), 4);
}
