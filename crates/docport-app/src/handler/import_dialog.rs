//! Import dialog message handlers

use tracing::{debug, warn};

use crate::import_dialog::{ContentFormat, ImportDialogState};
use crate::message::CursorMove;
use crate::state::AppState;

use super::UpdateResult;

/// Apply an edit to the open dialog, ignoring the message if it is closed
fn with_dialog(state: &mut AppState, edit: impl FnOnce(&mut ImportDialogState)) -> UpdateResult {
    match state.import_dialog.as_mut() {
        Some(dialog) => edit(dialog),
        None => debug!("Import dialog message ignored: dialog is closed"),
    }
    UpdateResult::none()
}

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_import_dialog();
    UpdateResult::none()
}

pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    state.close_import_dialog();
    UpdateResult::none()
}

/// Run the import; failures stay in the dialog as `last_error`
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    match state.submit_import() {
        Some(Ok(())) => {}
        Some(Err(e)) => debug!("Import kept dialog open: {}", e),
        None => warn!("Submit requested with no import dialog open"),
    }
    UpdateResult::none()
}

pub fn handle_set_format(state: &mut AppState, format: ContentFormat) -> UpdateResult {
    with_dialog(state, |dialog| dialog.set_format(format))
}

pub fn handle_toggle_format(state: &mut AppState) -> UpdateResult {
    with_dialog(state, ImportDialogState::toggle_format)
}

pub fn handle_insert_char(state: &mut AppState, c: char) -> UpdateResult {
    with_dialog(state, |dialog| dialog.insert_char(c))
}

pub fn handle_insert_text(state: &mut AppState, text: &str) -> UpdateResult {
    with_dialog(state, |dialog| dialog.insert_str(text))
}

pub fn handle_newline(state: &mut AppState) -> UpdateResult {
    with_dialog(state, ImportDialogState::insert_newline)
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    with_dialog(state, ImportDialogState::backspace)
}

pub fn handle_delete(state: &mut AppState) -> UpdateResult {
    with_dialog(state, ImportDialogState::delete)
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    with_dialog(state, ImportDialogState::clear_text)
}

pub fn handle_cursor(state: &mut AppState, movement: CursorMove) -> UpdateResult {
    with_dialog(state, |dialog| match movement {
        CursorMove::Left => dialog.move_left(),
        CursorMove::Right => dialog.move_right(),
        CursorMove::Up => dialog.move_up(),
        CursorMove::Down => dialog.move_down(),
        CursorMove::LineStart => dialog.move_home(),
        CursorMove::LineEnd => dialog.move_end(),
    })
}
