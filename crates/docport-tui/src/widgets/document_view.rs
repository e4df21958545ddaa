//! Read-only view of the editor's current document

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

const EMPTY_MESSAGE: &str = "Nothing imported yet. Press i to import content.";

pub struct DocumentView<'a> {
    text: &'a str,
    scroll: usize,
    focused: bool,
}

impl<'a> DocumentView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            scroll: 0,
            focused: true,
        }
    }

    /// First visible line
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for DocumentView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.text.lines().count();
        let title = if total == 0 {
            " Document ".to_string()
        } else {
            format!(" Document · {} lines ", total)
        };
        let block = styles::glass_block(self.focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if total == 0 {
            if inner.height > 0 {
                let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                Paragraph::new(EMPTY_MESSAGE)
                    .style(styles::text_muted())
                    .alignment(Alignment::Center)
                    .render(middle, buf);
            }
            return;
        }

        let lines: Vec<Line> = self
            .text
            .lines()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(Line::raw)
            .collect();
        Paragraph::new(lines)
            .style(styles::text_primary())
            .render(inner, buf);
    }
}
