//! Headless mode runner - a single import without the TUI

use std::io::Read;
use std::path::Path;

use docport_app::{ContentFormat, DocumentBuffer, EditorContent, ImportDialogState};
use docport_core::prelude::*;
use serde_json::Value;

use super::HeadlessEvent;

/// Run `input` through the import algorithm against a fresh document
pub fn import_once(format: ContentFormat, input: &str) -> HeadlessEvent {
    let mut buffer = DocumentBuffer::new();
    let mut dialog = ImportDialogState::new(format)
        .with_focus_editor(false)
        .with_text(input);
    let chars = dialog.char_count();

    match dialog.submit(Some(&mut buffer)) {
        Ok(()) => {
            let document = match buffer.content() {
                Some(EditorContent::Document(root)) => root.clone(),
                Some(EditorContent::Text(text)) => Value::String(text.clone()),
                None => Value::Null,
            };
            HeadlessEvent::imported(format, chars, document)
        }
        Err(e) => HeadlessEvent::import_failed(format, e.user_message()),
    }
}

/// Read the source, import it, and print the outcome.
///
/// Returns `Ok(false)` when the import was rejected. Only I/O problems
/// reading the source are errors.
pub fn run_headless(format: ContentFormat, input: Option<&Path>) -> Result<bool> {
    info!("docport starting in HEADLESS mode ({})", format);

    let source = match input {
        Some(path) => {
            info!("Reading import source from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            debug!("Reading import source from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let event = import_once(format, &source);
    event.emit();

    let success = event.is_success();
    info!("Headless import finished (success: {})", success);
    Ok(success)
}
