//! Import dialog session state and the import algorithm.
//!
//! One `ImportDialogState` lives for exactly one open→closed session of the
//! dialog. [`crate::state::AppState`] creates it on open and drops it on
//! cancel or after a successful import, so nothing typed here survives a
//! session.

use serde_json::Value;
use tracing::{error, info, warn};

use super::error::ImportError;
use super::format::ContentFormat;
use crate::editor_engine::{EditorContent, EditorEngine};

/// Observable phase of an open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Accepting input, no error shown
    Editing,
    /// The last submit failed and its message is displayed
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDialogState {
    /// Text typed or pasted by the user
    pub raw_text: String,
    /// Byte offset of the cursor in `raw_text`, always on a char boundary
    pub cursor: usize,
    /// Selected target format
    pub format: ContentFormat,
    /// Message from the last failed submit
    pub last_error: Option<String>,
    /// Ask the engine for focus after a successful import
    focus_editor: bool,
}

impl Default for ImportDialogState {
    fn default() -> Self {
        Self::new(ContentFormat::default())
    }
}

impl ImportDialogState {
    /// Fresh session state with empty text
    pub fn new(format: ContentFormat) -> Self {
        Self {
            raw_text: String::new(),
            cursor: 0,
            format,
            last_error: None,
            focus_editor: true,
        }
    }

    pub fn with_focus_editor(mut self, focus_editor: bool) -> Self {
        self.focus_editor = focus_editor;
        self
    }

    /// Pre-fill the textarea verbatim (cursor goes to the end)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.raw_text = text.into();
        self.cursor = self.raw_text.len();
        self
    }

    pub fn phase(&self) -> DialogPhase {
        if self.last_error.is_some() {
            DialogPhase::Error
        } else {
            DialogPhase::Editing
        }
    }

    /// Submit is disabled while the trimmed text is empty
    pub fn can_submit(&self) -> bool {
        !self.raw_text.trim().is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.raw_text.split('\n').count()
    }

    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }

    /// Cursor as (line index, column in chars)
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.raw_text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].chars().count())
    }

    // ─────────────────────────────────────────────────────────
    // Format selection
    // ─────────────────────────────────────────────────────────

    pub fn set_format(&mut self, format: ContentFormat) {
        self.format = format;
        self.last_error = None;
    }

    pub fn toggle_format(&mut self) {
        self.set_format(self.format.toggle());
    }

    // ─────────────────────────────────────────────────────────
    // Text editing
    // ─────────────────────────────────────────────────────────

    /// Replace the whole text verbatim
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.raw_text {
            self.raw_text = text;
            self.last_error = None;
        }
        self.cursor = self.raw_text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.raw_text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.text_changed();
    }

    /// Insert pasted text at the cursor
    pub fn insert_str(&mut self, text: &str) {
        let text = normalize_newlines(text);
        if text.is_empty() {
            return;
        }
        self.raw_text.insert_str(self.cursor, &text);
        self.cursor += text.len();
        self.text_changed();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.raw_text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.text_changed();
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.raw_text.replace_range(self.cursor..next, "");
            self.text_changed();
        }
    }

    pub fn clear_text(&mut self) {
        if !self.raw_text.is_empty() {
            self.raw_text.clear();
            self.text_changed();
        }
        self.cursor = 0;
    }

    // ─────────────────────────────────────────────────────────
    // Cursor movement (never clears the error)
    // ─────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// End of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.raw_text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_at_column(prev_start, column);
    }

    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.raw_text.len() {
            self.cursor = end;
            return;
        }
        let start = self.line_start(self.cursor);
        let column = self.raw_text[start..self.cursor].chars().count();
        self.cursor = self.offset_at_column(end + 1, column);
    }

    // ─────────────────────────────────────────────────────────
    // Import
    // ─────────────────────────────────────────────────────────

    /// Parse the text for the selected format and apply it to `engine`.
    ///
    /// On success the text and error are cleared; the caller closes the
    /// dialog. On failure `last_error` is set and `raw_text` is kept so the
    /// user can fix it and retry. The engine is called at most once.
    pub fn submit<E>(&mut self, engine: Option<&mut E>) -> Result<(), ImportError>
    where
        E: EditorEngine + ?Sized,
    {
        let result = self.apply(engine);

        match &result {
            Ok(()) => {
                info!(
                    "Imported {} content ({} chars)",
                    self.format.label(),
                    self.char_count()
                );
                self.raw_text.clear();
                self.cursor = 0;
                self.last_error = None;
            }
            Err(e) => {
                warn!("Import failed ({}): {}", self.format.label(), e);
                self.last_error = Some(e.user_message().to_string());
            }
        }

        result
    }

    fn apply<E>(&self, engine: Option<&mut E>) -> Result<(), ImportError>
    where
        E: EditorEngine + ?Sized,
    {
        let Some(engine) = engine else {
            return Err(ImportError::MissingEngine);
        };
        if !self.can_submit() {
            return Err(ImportError::EmptyInput);
        }

        match self.format {
            ContentFormat::Json => {
                let tree: Value = serde_json::from_str(&self.raw_text)
                    .map_err(|e| ImportError::InvalidJson(e.to_string()))?;
                engine
                    .set_content(EditorContent::Document(tree))
                    .map_err(|e| ImportError::InvalidJson(engine_failure(e)))?;
            }
            ContentFormat::Markdown => {
                engine
                    .set_content(EditorContent::Text(self.raw_text.clone()))
                    .map_err(|e| ImportError::ParseFailure(engine_failure(e)))?;
            }
        }

        if self.focus_editor {
            engine.focus();
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────

    fn text_changed(&mut self) {
        self.last_error = None;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.raw_text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.raw_text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.raw_text[..offset]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn line_end(&self, offset: usize) -> usize {
        self.raw_text[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(self.raw_text.len())
    }

    /// Byte offset of `column` chars into the line starting at `line_start`,
    /// clamped to the line's end
    fn offset_at_column(&self, line_start: usize, column: usize) -> usize {
        let end = self.line_end(line_start);
        self.raw_text[line_start..end]
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(end)
    }
}

/// Detail text for an engine error; anything beyond a content rejection is
/// logged as an engine fault
fn engine_failure(e: docport_core::Error) -> String {
    if !e.is_recoverable() {
        error!("Editor engine fault: {}", e);
    }
    e.to_string()
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
