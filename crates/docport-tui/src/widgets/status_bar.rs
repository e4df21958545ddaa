//! Bottom status bar: mode badge, last import, key hints

use docport_app::{ImportRecord, UiMode};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    mode: UiMode,
    last_import: Option<&'a ImportRecord>,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: UiMode, last_import: Option<&'a ImportRecord>) -> Self {
        Self { mode, last_import }
    }

    fn mode_badge(&self) -> Span<'static> {
        let label = match self.mode {
            UiMode::Normal => " NORMAL ",
            UiMode::ImportDialog => " IMPORT ",
        };
        Span::styled(label, styles::focused_selected())
    }

    fn import_summary(&self) -> Span<'static> {
        match self.last_import {
            Some(record) => Span::styled(
                format!(
                    " Imported {} · {} chars · {}",
                    record.format.label(),
                    record.chars,
                    record.at.format("%H:%M:%S")
                ),
                styles::status_green(),
            ),
            None => Span::styled(" No content imported", styles::text_muted()),
        }
    }

    fn hints(&self) -> Line<'static> {
        let pairs: &[(&str, &str)] = match self.mode {
            UiMode::Normal => &[("i", " import  "), ("↑↓", " scroll  "), ("q", " quit ")],
            UiMode::ImportDialog => &[("Ctrl+S", " import  "), ("Esc", " cancel ")],
        };
        let spans: Vec<Span> = pairs
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(*key, styles::keybinding()),
                    Span::styled(*label, styles::text_muted()),
                ]
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::STATUS_BAR_BG));

        let hints = self.hints();
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.width() as u16),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![self.mode_badge(), self.import_summary()]))
            .render(left, buf);
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::{Local, TimeZone};
    use docport_app::ContentFormat;

    #[test]
    fn test_normal_mode_without_imports() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::Normal, None), term.area());

        assert!(term.buffer_contains("NORMAL"));
        assert!(term.buffer_contains("No content imported"));
        assert!(term.buffer_contains("i import"));
    }

    #[test]
    fn test_shows_last_import() {
        let record = ImportRecord {
            format: ContentFormat::Json,
            chars: 42,
            at: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap(),
        };
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::Normal, Some(&record)), term.area());

        assert!(term.buffer_contains("Imported JSON · 42 chars · 09:30:05"));
    }

    #[test]
    fn test_import_mode_badge_and_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(UiMode::ImportDialog, None), term.area());

        assert!(term.buffer_contains("IMPORT"));
        assert!(term.buffer_contains("Esc cancel"));
        assert!(!term.buffer_contains("q quit"));
    }
}
