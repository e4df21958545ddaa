//! Import Content modal.
//!
//! Renders an [`ImportDialogState`] as a centered modal: format selector,
//! multi-line textarea with cursor, error line, counters with the
//! Import/Cancel buttons, and a key hint row.

use docport_app::config::MIN_TEXTAREA_ROWS;
use docport_app::{ContentFormat, DialogPhase, ImportDialogState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::styles;

const TITLE: &str = " Import Content ";
const MAX_WIDTH: u16 = 76;
/// Rows around the textarea: outer border, selector, textarea border,
/// error, footer, hints
const CHROME_HEIGHT: u16 = 8;

pub struct ImportDialog<'a> {
    state: &'a ImportDialogState,
    rows: u16,
}

impl<'a> ImportDialog<'a> {
    pub fn new(state: &'a ImportDialogState) -> Self {
        Self { state, rows: 12 }
    }

    /// Visible textarea height
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(MIN_TEXTAREA_ROWS);
        self
    }

    fn modal_rect(&self, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        centered_rect(width, self.rows + CHROME_HEIGHT, area)
    }

    fn render_format_selector(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Format  ", styles::text_secondary())];
        for format in ContentFormat::ALL {
            let style = if format == self.state.format {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", format.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(" Tab to switch", styles::text_muted()));
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_textarea(&self, area: Rect, buf: &mut Buffer) {
        let block = match self.state.phase() {
            DialogPhase::Editing => styles::glass_block(true),
            DialogPhase::Error => styles::glass_block(true).border_style(styles::status_red()),
        }
        .title(" Content ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if self.state.raw_text.is_empty() {
            Paragraph::new(self.state.format.placeholder())
                .style(styles::text_muted())
                .render(inner, buf);
            buf[(inner.x, inner.y)].set_style(styles::cursor());
            return;
        }

        let (cursor_line, cursor_col) = self.state.cursor_line_col();
        let height = inner.height as usize;
        let width = inner.width as usize;
        let top = cursor_line.saturating_sub(height - 1);
        let left = self
            .state
            .raw_text
            .split('\n')
            .nth(cursor_line)
            .map(|line| scroll_offset(line, cursor_col, width))
            .unwrap_or(0);

        for (row, line) in self
            .state
            .raw_text
            .split('\n')
            .skip(top)
            .take(height)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let (pad, visible) = visible_from(line, left);
            buf.set_stringn(
                inner.x + pad as u16,
                y,
                visible,
                width.saturating_sub(pad),
                styles::text_primary(),
            );

            if top + row == cursor_line {
                let before: usize = line.chars().take(cursor_col).map(cell_width).sum();
                let x = inner.x + (before - left) as u16;
                if x < inner.right() {
                    buf[(x, y)].set_style(styles::cursor());
                }
            }
        }
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = &self.state.last_error {
            Paragraph::new(format!("✗ {}", error))
                .style(styles::status_red())
                .render(area, buf);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let import_style = if self.state.can_submit() {
            styles::focused_selected()
        } else {
            styles::text_muted()
        };
        let buttons = Line::from(vec![
            Span::styled("[ Import ]", import_style),
            Span::raw(" "),
            Span::styled("[ Cancel ]", styles::text_secondary()),
        ]);

        let [counts_area, buttons_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(buttons.width() as u16),
        ])
        .areas(area);

        let lines = self.state.line_count();
        let chars = self.state.char_count();
        let counts = format!(
            "{} {} · {} {}",
            lines,
            plural(lines, "line", "lines"),
            chars,
            plural(chars, "char", "chars"),
        );
        Paragraph::new(counts)
            .style(styles::text_muted())
            .render(counts_area, buf);
        Paragraph::new(buttons)
            .alignment(Alignment::Right)
            .render(buttons_area, buf);
    }

    fn render_hints(&self, area: Rect, buf: &mut Buffer) {
        let hint = |key: &'static str, label: &'static str| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(label, styles::text_muted()),
            ]
        };
        let spans: Vec<Span> = [
            hint("Ctrl+S", " import  "),
            hint("Tab", " format  "),
            hint("Ctrl+U", " clear  "),
            hint("Esc", " cancel"),
        ]
        .into_iter()
        .flatten()
        .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

fn cell_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Leftmost visible cell so the cursor (and the cell it covers) fits in
/// `width`. Always a char boundary of `line` at or before the cursor.
fn scroll_offset(line: &str, cursor_col: usize, width: usize) -> usize {
    let cursor_x: usize = line.chars().take(cursor_col).map(cell_width).sum();
    let cursor_cell = line
        .chars()
        .nth(cursor_col)
        .map(cell_width)
        .unwrap_or(1)
        .clamp(1, width.max(1));
    let needed = (cursor_x + cursor_cell).saturating_sub(width);

    let mut offset = 0;
    for c in line.chars() {
        if offset >= needed {
            break;
        }
        offset += cell_width(c);
    }
    offset
}

/// The part of `line` starting at display cell `left`, with the padding
/// left by a wide char cut in half
fn visible_from(line: &str, left: usize) -> (usize, &str) {
    let mut acc = 0;
    for (i, c) in line.char_indices() {
        if acc >= left {
            return (acc - left, &line[i..]);
        }
        acc += cell_width(c);
    }
    (0, "")
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

impl Widget for ImportDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = self.modal_rect(area);
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let block = styles::modal_block(TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [selector, textarea, error, footer, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_format_selector(selector, buf);
        self.render_textarea(textarea, buf);
        self.render_error(error, buf);
        self.render_footer(footer, buf);
        self.render_hints(hints, buf);
    }
}
