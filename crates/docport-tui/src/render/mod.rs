//! Main render/view function (View in TEA pattern)


use docport_app::state::AppState;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only mutates state that tracks rendering info (the document viewport
/// height used for paging).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let status_height = u16::from(state.settings.ui.show_status_bar);
    let [document_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(status_height)]).areas(area);

    // Borders take two rows
    state.document_viewport = document_area.height.saturating_sub(2) as usize;

    let text = state.document_text();
    frame.render_widget(
        widgets::DocumentView::new(&text)
            .scroll(state.document_scroll)
            .focused(!state.is_import_dialog_open()),
        document_area,
    );

    if state.settings.ui.show_status_bar {
        frame.render_widget(
            widgets::StatusBar::new(state.ui_mode, state.last_import.as_ref()),
            status_area,
        );
    }

    if let Some(dialog) = &state.import_dialog {
        frame.render_widget(
            widgets::ImportDialog::new(dialog).rows(state.settings.import.rows()),
            area,
        );
    }
}
