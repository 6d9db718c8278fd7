/// SearchBox widget - the live title search field
///
/// Shows the current search text. While search entry is active the text
/// carries a block cursor and the selection color so it is obvious that
/// keystrokes go to the search field.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

const LABEL: &str = "Search: ";

/// Widget for displaying the search field
#[derive(Debug, Clone)]
pub struct SearchBox {
    /// Current search text
    pub text: String,
    /// Whether search entry is capturing keystrokes
    pub active: bool,
}

impl SearchBox {
    pub fn new(text: String, active: bool) -> Self {
        Self { text, active }
    }
}

impl RenderableWidget for SearchBox {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < 1 {
            return;
        }

        buf.set_string(area.x, area.y, LABEL, Style::default());

        let value = if self.active {
            format!("{}█", self.text)
        } else {
            self.text.clone()
        };
        let style = if self.active {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default()
        };
        buf.set_string(area.x + LABEL.len() as u16, area.y, &value, style);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
