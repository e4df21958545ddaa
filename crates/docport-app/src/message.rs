//! Message types for the application (TEA pattern)

use crate::import_dialog::ContentFormat;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste { text: String },

    /// Tick event for periodic updates
    Tick,

    /// Request to quit
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Document View Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll document up one line
    ScrollUp,
    /// Scroll document down one line
    ScrollDown,
    /// Page up in document
    PageUp,
    /// Page down in document
    PageDown,
    /// Jump to start of document
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // Import Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Open the import dialog with a fresh session
    OpenImportDialog,
    /// Close the dialog, discarding its text
    CancelImportDialog,
    /// Submit the dialog's text to the editor
    SubmitImport,
    /// Select a specific format
    ImportSetFormat(ContentFormat),
    /// Switch to the other format
    ImportToggleFormat,
    /// Type a character at the cursor
    ImportInsertChar(char),
    /// Insert text at the cursor (paste)
    ImportInsertText(String),
    /// Insert a line break
    ImportNewline,
    /// Delete the character before the cursor
    ImportBackspace,
    /// Delete the character under the cursor
    ImportDelete,
    /// Remove all text
    ImportClearText,
    /// Move the textarea cursor
    ImportCursor(CursorMove),
}

/// Cursor movement inside the import textarea
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}
