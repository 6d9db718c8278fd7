/// PageBar widget - pagination control
///
/// Renders every page number with the current page bracketed, flanked by
/// previous/next glyphs. A single page needs no navigation, so the bar
/// renders nothing at all in that case.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Widget for displaying page navigation
#[derive(Debug, Clone)]
pub struct PageBar {
    /// Current page, 1-based
    pub current: usize,
    /// Total number of pages
    pub page_count: usize,
}

impl PageBar {
    pub fn new(current: usize, page_count: usize) -> Self {
        Self {
            current,
            page_count,
        }
    }
}

impl RenderableWidget for PageBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < 1 || self.page_count <= 1 {
            return;
        }

        let mut line = format!("{} ", config.box_chars.page_prev);
        let mut current_x = 0;
        for page in 1..=self.page_count {
            if page == self.current {
                current_x = line.width();
                line.push_str(&format!("[{}]", page));
            } else {
                line.push_str(&page.to_string());
            }
            line.push(' ');
        }
        line.push_str(&config.box_chars.page_next);

        buf.set_string(area.x, area.y, &line, Style::default());

        // Recolor the bracketed current page
        let segment = format!("[{}]", self.current);
        buf.set_string(
            area.x + current_x as u16,
            area.y,
            &segment,
            Style::default().fg(config.selection_fg),
        );
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
