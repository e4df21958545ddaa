//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::document_buffer::DocumentBuffer;
use crate::editor_engine::EditorEngine;
use crate::import_dialog::{ContentFormat, ImportDialogState, ImportError};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Document view with status bar
    #[default]
    Normal,

    /// Import Content dialog over the document view
    ImportDialog,
}

/// A successful import, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub format: ContentFormat,
    pub chars: usize,
    pub at: DateTime<Local>,
}

/// Complete application state (the Model in TEA)
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Settings from config file
    pub settings: Settings,

    /// Import dialog session; `None` while the dialog is closed
    pub import_dialog: Option<ImportDialogState>,

    /// Active editor engine; `None` when no editing context is attached
    pub editor: Option<Box<dyn EditorEngine>>,

    /// First visible document line
    pub document_scroll: usize,

    /// Document viewport height, updated by the renderer
    pub document_viewport: usize,

    /// Most recent successful import
    pub last_import: Option<ImportRecord>,

    quitting: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("ui_mode", &self.ui_mode)
            .field("settings", &self.settings)
            .field("import_dialog", &self.import_dialog)
            .field("has_editor", &self.editor.is_some())
            .field("document_scroll", &self.document_scroll)
            .field("last_import", &self.last_import)
            .field("quitting", &self.quitting)
            .finish()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings with an empty in-memory document
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_editor(settings, Some(Box::new(DocumentBuffer::new())))
    }

    pub fn with_editor(settings: Settings, editor: Option<Box<dyn EditorEngine>>) -> Self {
        Self {
            ui_mode: UiMode::Normal,
            settings,
            import_dialog: None,
            editor,
            document_scroll: 0,
            document_viewport: 0,
            last_import: None,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Import Dialog
    // ─────────────────────────────────────────────────────────

    /// Open the dialog with a fresh session. No-op if already open.
    pub fn open_import_dialog(&mut self) {
        if self.import_dialog.is_some() {
            return;
        }
        let import = &self.settings.import;
        self.import_dialog = Some(
            ImportDialogState::new(import.default_format).with_focus_editor(import.focus_editor),
        );
        self.ui_mode = UiMode::ImportDialog;
        tracing::debug!("Import dialog opened");
    }

    /// Open the dialog with text already filled in
    pub fn open_import_dialog_with(&mut self, format: ContentFormat, text: impl Into<String>) {
        self.import_dialog = Some(
            ImportDialogState::new(format)
                .with_focus_editor(self.settings.import.focus_editor)
                .with_text(text),
        );
        self.ui_mode = UiMode::ImportDialog;
    }

    /// Close the dialog and drop everything typed in it
    pub fn close_import_dialog(&mut self) {
        if self.import_dialog.take().is_some() {
            tracing::debug!("Import dialog closed");
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn is_import_dialog_open(&self) -> bool {
        self.import_dialog.is_some()
    }

    /// Run the import for the open dialog.
    ///
    /// Returns `None` when no dialog is open. On success the dialog is
    /// closed; on failure it stays open with its error set.
    pub fn submit_import(&mut self) -> Option<Result<(), ImportError>> {
        let dialog = self.import_dialog.as_mut()?;
        let format = dialog.format;
        let chars = dialog.char_count();

        let result = dialog.submit(self.editor.as_deref_mut());
        if result.is_ok() {
            self.last_import = Some(ImportRecord {
                format,
                chars,
                at: Local::now(),
            });
            self.document_scroll = 0;
            self.close_import_dialog();
        }
        Some(result)
    }

    // ─────────────────────────────────────────────────────────
    // Document View
    // ─────────────────────────────────────────────────────────

    /// Current document as display text
    pub fn document_text(&self) -> String {
        self.editor
            .as_ref()
            .map(|editor| editor.text())
            .unwrap_or_default()
    }

    fn max_scroll(&self) -> usize {
        let lines = self.document_text().lines().count();
        lines.saturating_sub(self.document_viewport.max(1))
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.document_scroll.saturating_add_signed(delta);
        self.document_scroll = target.min(self.max_scroll());
    }

    pub fn page_size(&self) -> isize {
        self.document_viewport.saturating_sub(1).max(1) as isize
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor_engine::EditorContent;

    #[test]
    fn test_new_state_has_editor_and_closed_dialog() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.editor.is_some());
        assert!(!state.is_import_dialog_open());
        assert_eq!(state.document_text(), "");
    }

    #[test]
    fn test_open_uses_configured_format() {
        let mut settings = Settings::default();
        settings.import.default_format = ContentFormat::Json;
        let mut state = AppState::with_settings(settings);

        state.open_import_dialog();

        assert_eq!(state.ui_mode, UiMode::ImportDialog);
        assert_eq!(
            state.import_dialog.as_ref().unwrap().format,
            ContentFormat::Json
        );
    }

    #[test]
    fn test_open_twice_keeps_session() {
        let mut state = AppState::new();
        state.open_import_dialog();
        state.import_dialog.as_mut().unwrap().insert_char('x');

        state.open_import_dialog();

        assert_eq!(state.import_dialog.as_ref().unwrap().raw_text, "x");
    }

    #[test]
    fn test_cancel_discards_text_and_reopen_is_fresh() {
        let mut state = AppState::new();
        state.open_import_dialog();
        {
            let dialog = state.import_dialog.as_mut().unwrap();
            dialog.insert_str("draft");
            dialog.set_format(ContentFormat::Json);
        }

        state.close_import_dialog();
        assert!(state.import_dialog.is_none());
        assert_eq!(state.ui_mode, UiMode::Normal);

        state.open_import_dialog();
        let dialog = state.import_dialog.as_ref().unwrap();
        assert!(dialog.raw_text.is_empty());
        assert_eq!(dialog.format, ContentFormat::Markdown);
        assert!(dialog.last_error.is_none());
    }

    #[test]
    fn test_successful_submit_closes_and_records() {
        let mut state = AppState::new();
        state.open_import_dialog_with(ContentFormat::Markdown, "# Hello");

        let result = state.submit_import();

        assert_eq!(result, Some(Ok(())));
        assert!(!state.is_import_dialog_open());
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(state.document_text(), "# Hello");
        let record = state.last_import.as_ref().unwrap();
        assert_eq!(record.format, ContentFormat::Markdown);
        assert_eq!(record.chars, 7);
    }

    #[test]
    fn test_failed_submit_keeps_dialog_open() {
        let mut state = AppState::new();
        state.open_import_dialog_with(ContentFormat::Json, "{invalid");

        let result = state.submit_import();

        assert!(matches!(result, Some(Err(ImportError::InvalidJson(_)))));
        assert_eq!(state.ui_mode, UiMode::ImportDialog);
        assert_eq!(state.import_dialog.as_ref().unwrap().raw_text, "{invalid");
        assert!(state.last_import.is_none());
    }

    #[test]
    fn test_buffer_rejection_surfaces_as_invalid_json() {
        let mut state = AppState::new();
        state.open_import_dialog_with(ContentFormat::Json, "[1, 2]");

        let result = state.submit_import();

        assert!(matches!(result, Some(Err(ImportError::InvalidJson(_)))));
        assert_eq!(state.document_text(), "");
    }

    #[test]
    fn test_submit_without_editor_reports_error() {
        let mut state = AppState::with_editor(Settings::default(), None);
        state.open_import_dialog_with(ContentFormat::Markdown, "text");

        let result = state.submit_import();

        assert_eq!(result, Some(Err(ImportError::MissingEngine)));
        assert!(state.is_import_dialog_open());
        assert_eq!(state.document_text(), "");
    }

    #[test]
    fn test_submit_without_dialog_is_none() {
        let mut state = AppState::new();
        assert_eq!(state.submit_import(), None);
    }

    #[test]
    fn test_scroll_is_clamped_to_document() {
        let mut state = AppState::new();
        state
            .editor
            .as_mut()
            .unwrap()
            .set_content(EditorContent::Text("1\n2\n3\n4\n5".into()))
            .unwrap();
        state.document_viewport = 2;

        state.scroll_by(10);
        assert_eq!(state.document_scroll, 3);

        state.scroll_by(-1);
        assert_eq!(state.document_scroll, 2);

        state.scroll_by(-10);
        assert_eq!(state.document_scroll, 0);
    }

    #[test]
    fn test_request_quit() {
        let mut state = AppState::new();
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }
}
