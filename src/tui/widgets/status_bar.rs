/// StatusBar widget - keyboard hints at the bottom of the screen
///
/// Renders a horizontal separator with a hint line under it. The hint
/// set follows the interaction mode: search entry shows editing keys,
/// otherwise the focused panel decides which shortcuts are offered.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::tui::state::Focus;
use crate::tui::widgets::RenderableWidget;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The keyboard key (e.g., "q", "Tab", "/")
    pub key: String,
    /// The action description (e.g., "quit", "search")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for displaying keyboard hints
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Hints to display, left to right
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    pub fn new(hints: Vec<KeyHint>) -> Self {
        Self { hints }
    }

    /// Build the hint set for the current interaction mode
    pub fn for_mode(focus: Focus, search_active: bool) -> Self {
        let hints = if search_active {
            vec![
                KeyHint::new("type", "to filter"),
                KeyHint::new("Backspace", "erase"),
                KeyHint::new("Enter/Esc", "done"),
            ]
        } else {
            match focus {
                Focus::GenreList => vec![
                    KeyHint::new("↑↓", "move"),
                    KeyHint::new("Enter", "apply"),
                    KeyHint::new("Tab", "movies"),
                    KeyHint::new("/", "search"),
                    KeyHint::new("q", "quit"),
                ],
                Focus::MovieTable => vec![
                    KeyHint::new("↑↓", "move"),
                    KeyHint::new("l", "like"),
                    KeyHint::new("x", "del"),
                    KeyHint::new("s", "sort"),
                    KeyHint::new("o", "order"),
                    KeyHint::new("←→", "page"),
                    KeyHint::new("/", "search"),
                    KeyHint::new("Tab", "genres"),
                    KeyHint::new("q", "quit"),
                ],
            }
        };
        Self::new(hints)
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        let separator = config.box_chars.horizontal.repeat(area.width as usize);
        buf.set_string(area.x, area.y, &separator, Style::default());

        let mut x = area.x + 1;
        let y = area.y + 1;
        for hint in &self.hints {
            if x >= area.x + area.width {
                break;
            }
            buf.set_string(x, y, &hint.key, Style::default().fg(config.header_fg));
            x += hint.key.chars().count() as u16;
            buf.set_string(x, y, " ", Style::default());
            x += 1;
            buf.set_string(x, y, &hint.action, Style::default());
            x += hint.action.chars().count() as u16 + 2;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + hint line
    }
}
