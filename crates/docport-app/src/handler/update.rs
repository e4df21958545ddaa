//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tracing::{debug, info};

use super::{import_dialog, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.close_import_dialog();
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste { text } => {
            if state.is_import_dialog_open() {
                UpdateResult::message(Message::ImportInsertText(text))
            } else {
                debug!("Paste ignored outside import dialog ({} bytes)", text.len());
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Import Dialog Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenImportDialog => import_dialog::handle_open(state),
        Message::CancelImportDialog => import_dialog::handle_cancel(state),
        Message::SubmitImport => import_dialog::handle_submit(state),
        Message::ImportSetFormat(format) => import_dialog::handle_set_format(state, format),
        Message::ImportToggleFormat => import_dialog::handle_toggle_format(state),
        Message::ImportInsertChar(c) => import_dialog::handle_insert_char(state, c),
        Message::ImportInsertText(text) => import_dialog::handle_insert_text(state, &text),
        Message::ImportNewline => import_dialog::handle_newline(state),
        Message::ImportBackspace => import_dialog::handle_backspace(state),
        Message::ImportDelete => import_dialog::handle_delete(state),
        Message::ImportClearText => import_dialog::handle_clear(state),
        Message::ImportCursor(movement) => import_dialog::handle_cursor(state, movement),
    }
}
