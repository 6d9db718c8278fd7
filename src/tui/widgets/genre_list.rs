/// GenreList widget - the genre filter panel
///
/// Renders one row per genre with a browsing cursor. The genre whose
/// filter is currently applied is marked in bold so it stays visible
/// while the cursor moves. Applying a filter is the reducer's job; this
/// widget only displays.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use crate::tui::widgets::RenderableWidget;
use crate::types::Genre;

const SELECTOR_COL_WIDTH: usize = 2;
/// Panel width used by the layout
pub const PANEL_WIDTH: u16 = 18;

/// Widget for displaying the genre filter list
#[derive(Debug, Clone)]
pub struct GenreList {
    /// All selectable genres, "All Genres" first
    pub genres: Vec<Genre>,
    /// Genre whose filter is applied, None means no filter
    pub applied: Option<Genre>,
    /// Row under the cursor
    pub cursor: usize,
    /// Whether this panel has focus
    pub focused: bool,
}

impl GenreList {
    pub fn new(genres: Vec<Genre>, applied: Option<Genre>, cursor: usize, focused: bool) -> Self {
        Self {
            genres,
            applied,
            cursor,
            focused,
        }
    }

    /// Whether this genre's filter is the one currently applied
    fn is_applied(&self, genre: &Genre) -> bool {
        match &self.applied {
            Some(applied) => applied.id == genre.id,
            None => genre.is_all(),
        }
    }

    /// Get the cursor row style based on focus state
    fn selection_style(&self, config: &DisplayConfig) -> Style {
        if self.focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(config.unfocused_selection_fg())
        }
    }
}

impl RenderableWidget for GenreList {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < 2 || area.width < PANEL_WIDTH {
            return; // Not enough space
        }

        buf.set_string(
            area.x,
            area.y,
            "Genres",
            Style::default().fg(config.header_fg),
        );

        let name_width = area.width as usize - SELECTOR_COL_WIDTH;
        for (i, genre) in self.genres.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }

            let under_cursor = i == self.cursor;
            let applied = self.is_applied(genre);

            let selector = if under_cursor {
                format!("{} ", config.box_chars.selector)
            } else {
                " ".repeat(SELECTOR_COL_WIDTH)
            };

            let mut style = if under_cursor {
                self.selection_style(config)
            } else if applied {
                Style::default().fg(config.header_fg)
            } else {
                Style::default()
            };
            if applied {
                style = style.add_modifier(Modifier::BOLD);
            }

            let line = format!("{}{}", selector, fit_width(&genre.name, name_width));
            buf.set_string(area.x, y, &line, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1 + self.genres.len() as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(PANEL_WIDTH)
    }
}
