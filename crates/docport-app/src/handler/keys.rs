//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{CursorMove, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::ImportDialog => handle_key_import_dialog(state, key),
    }
}

/// Handle key events in the document view
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('i') => Some(Message::OpenImportDialog),

        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),

        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),

        _ => None,
    }
}

/// Handle key events while the import dialog is open
fn handle_key_import_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelImportDialog),

        // Import button is disabled while the text is blank
        InputKey::CharCtrl('s') => {
            let enabled = state
                .import_dialog
                .as_ref()
                .is_some_and(|dialog| dialog.can_submit());
            enabled.then_some(Message::SubmitImport)
        }
        InputKey::CharCtrl('u') => Some(Message::ImportClearText),

        InputKey::Tab | InputKey::BackTab => Some(Message::ImportToggleFormat),

        InputKey::Enter => Some(Message::ImportNewline),
        InputKey::Backspace => Some(Message::ImportBackspace),
        InputKey::Delete => Some(Message::ImportDelete),

        InputKey::Left => Some(Message::ImportCursor(CursorMove::Left)),
        InputKey::Right => Some(Message::ImportCursor(CursorMove::Right)),
        InputKey::Up => Some(Message::ImportCursor(CursorMove::Up)),
        InputKey::Down => Some(Message::ImportCursor(CursorMove::Down)),
        InputKey::Home => Some(Message::ImportCursor(CursorMove::LineStart)),
        InputKey::End => Some(Message::ImportCursor(CursorMove::LineEnd)),

        InputKey::Char(c) => Some(Message::ImportInsertChar(c)),

        _ => None,
    }
}
