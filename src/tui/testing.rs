//! General test utilities for TUI tests.
//!
//! This module provides common test helpers used across multiple test modules.
//! For widget-specific rendering helpers, see `crate::tui::widgets::testing`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

use crate::catalog::CatalogAction;
use crate::fixtures::{create_genres, create_movies};
use crate::tui::{reduce, Action, AppState};

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

/// Create an AppState with the fixture catalog loaded
pub fn loaded_state() -> AppState {
    reduce(
        AppState::default(),
        Action::Catalog(CatalogAction::Load {
            movies: create_movies(),
            genres: create_genres(),
        }),
    )
}

/// Run a sequence of actions through the reducer
pub fn dispatch_all(state: AppState, actions: Vec<Action>) -> AppState {
    actions.into_iter().fold(state, reduce)
}

/// Build a key press event for key handling tests
pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Helper for buffer assertions
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);
    let buffer_width = buf.area().width as usize;

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}",
        expected.len(),
        actual.len()
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i].chars().count(),
            buffer_width,
            "Line {} width mismatch: expected {}, got {}",
            i,
            buffer_width,
            actual[i].chars().count()
        );
        assert_eq!(
            actual[i].trim_end(),
            expected_line.trim_end(),
            "Line {} mismatch:\nExpected: '{}'\nActual:   '{}'",
            i,
            expected_line,
            actual[i]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SortField;

    #[test]
    fn test_loaded_state_has_catalog() {
        let state = loaded_state();
        assert_eq!(state.catalog.movies.len(), 9);
        // All Genres is prepended by the load
        assert_eq!(state.catalog.genres.len(), 4);
        assert!(state.catalog.genres[0].is_all());
    }

    #[test]
    fn test_dispatch_all_applies_in_order() {
        let state = dispatch_all(
            loaded_state(),
            vec![Action::SortCycleField, Action::SortCycleField],
        );
        assert_eq!(state.catalog.sort.field, SortField::Rating);
    }

    #[test]
    fn test_press_builds_press_event() {
        let event = press(KeyCode::Char('q'));
        assert_eq!(event.code, KeyCode::Char('q'));
        assert_eq!(event.kind, crossterm::event::KeyEventKind::Press);
    }
}
