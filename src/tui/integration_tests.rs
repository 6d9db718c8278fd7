//! Integration tests for the entire interaction flow
//!
//! These tests verify that input flows correctly through the system:
//! Key → Action → Reducer → State → Render

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::tui::testing::{buffer_lines, loaded_state, press, RENDER_WIDTH};
    use crate::tui::widgets::testing::test_config;
    use crate::tui::{key_to_action, reduce, render_app, Action, AppState, Focus};
    use crate::types::{SortField, SortOrder};

    /// Feed a sequence of key presses through the key handler and reducer
    fn type_keys(mut state: AppState, codes: Vec<KeyCode>) -> AppState {
        for code in codes {
            if let Some(action) = key_to_action(press(code), &state) {
                state = reduce(state, action);
            }
        }
        state
    }

    fn render_to_buffer(state: &AppState, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        render_app(state, &test_config(), buf.area, &mut buf);
        buf
    }

    #[test]
    fn test_page_navigation_via_keys() {
        let state = type_keys(loaded_state(), vec![KeyCode::Right]);
        assert_eq!(state.catalog.current_page, 2);
        assert_eq!(state.view().movies[0].title, "Terminator");

        // Right again is clamped at the last page
        let state = type_keys(state, vec![KeyCode::Right]);
        assert_eq!(state.catalog.current_page, 2);

        let state = type_keys(state, vec![KeyCode::Left]);
        assert_eq!(state.catalog.current_page, 1);
    }

    #[test]
    fn test_number_key_jumps_to_page() {
        let state = type_keys(loaded_state(), vec![KeyCode::Char('2')]);
        assert_eq!(state.catalog.current_page, 2);

        // Page 9 does not exist, the jump is ignored
        let state = type_keys(state, vec![KeyCode::Char('9')]);
        assert_eq!(state.catalog.current_page, 2);
    }

    #[test]
    fn test_search_flow_via_keys() {
        let state = type_keys(
            loaded_state(),
            vec![KeyCode::Char('/'), KeyCode::Char('t'), KeyCode::Char('e')],
        );

        assert!(state.ui.search_active);
        assert_eq!(state.catalog.search_text, "te");
        let view = state.view();
        assert_eq!(view.total_count, 1);
        assert_eq!(view.movies[0].title, "Terminator");

        // Esc leaves search entry but keeps the filter text
        let state = type_keys(state, vec![KeyCode::Esc]);
        assert!(!state.ui.search_active);
        assert_eq!(state.catalog.search_text, "te");
    }

    #[test]
    fn test_search_entry_captures_shortcut_chars() {
        let state = type_keys(
            loaded_state(),
            vec![KeyCode::Char('/'), KeyCode::Char('q'), KeyCode::Char('s')],
        );

        // q and s went into the search text instead of acting as shortcuts
        assert_eq!(state.catalog.search_text, "qs");
        assert_eq!(state.catalog.sort.field, SortField::Title);
    }

    #[test]
    fn test_genre_filter_via_keys() {
        let state = type_keys(
            loaded_state(),
            vec![
                KeyCode::Tab,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Enter,
            ],
        );

        assert_eq!(state.ui.focus, Focus::GenreList);
        let selected = state.catalog.selected_genre.as_ref().map(|g| g.name.clone());
        assert_eq!(selected, Some("Comedy".to_string()));
        assert_eq!(state.view().total_count, 4);
    }

    #[test]
    fn test_genre_filter_is_cleared_by_search() {
        let state = type_keys(
            loaded_state(),
            vec![KeyCode::Tab, KeyCode::Down, KeyCode::Enter],
        );
        assert!(state.catalog.selected_genre.is_some());

        let state = type_keys(state, vec![KeyCode::Char('/'), KeyCode::Char('a')]);
        assert!(state.catalog.selected_genre.is_none());
        assert_eq!(state.catalog.search_text, "a");
    }

    #[test]
    fn test_like_and_delete_via_keys() {
        // Cursor starts on Airplane, the first row of the default view
        let state = type_keys(loaded_state(), vec![KeyCode::Char('l')]);
        let airplane = state
            .catalog
            .movies
            .iter()
            .find(|m| m.title == "Airplane")
            .unwrap();
        assert!(airplane.liked);

        let state = type_keys(state, vec![KeyCode::Char('x')]);
        assert_eq!(state.catalog.movies.len(), 8);
        assert!(!state.catalog.movies.iter().any(|m| m.title == "Airplane"));
    }

    #[test]
    fn test_sort_keys_cycle_and_toggle() {
        let state = type_keys(loaded_state(), vec![KeyCode::Char('s')]);
        assert_eq!(state.catalog.sort.field, SortField::Genre);
        assert_eq!(state.catalog.sort.order, SortOrder::Asc);

        let state = type_keys(state, vec![KeyCode::Char('o')]);
        assert_eq!(state.catalog.sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_quit_key_maps_to_quit_action() {
        let state = loaded_state();
        let action = key_to_action(press(KeyCode::Char('q')), &state);
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn test_render_default_screen() {
        let state = loaded_state();
        let buf = render_to_buffer(&state, RENDER_WIDTH, 24);
        let lines = buffer_lines(&buf);

        // Count message and genre panel header share the top row
        assert!(lines[0].contains("Genres"));
        assert!(lines[0].contains("Showing 9 movies in the database."));
        assert!(lines[1].contains("All Genres"));
        assert!(lines[1].contains("Search:"));
        assert!(lines[3].contains("Comedy"));

        // Table header, separator, then the first page sorted by title
        assert!(lines[2].contains("Title ▲"));
        assert!(lines[4].contains("Airplane"));
        assert!(lines[4].contains("►"));
        assert!(lines[5].contains("Die Hard"));
        assert!(lines[8].contains("Showgirls"));

        // Two pages of nine movies
        assert!(lines[21].contains("‹ [1] 2 ›"));

        // Hint line at the bottom
        assert!(lines[23].contains("q quit"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let buf = render_to_buffer(&AppState::default(), RENDER_WIDTH, 24);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("There are no movies in the database"));
        // No rows and no page bar
        assert!(!lines[21].contains("["));
    }

    #[test]
    fn test_render_search_entry() {
        let state = type_keys(
            loaded_state(),
            vec![KeyCode::Char('/'), KeyCode::Char('t')],
        );
        let buf = render_to_buffer(&state, RENDER_WIDTH, 24);
        let lines = buffer_lines(&buf);

        assert!(lines[1].contains("Search: t█"));
        assert!(lines[0].contains("Showing 3 movies in the database."));
        assert!(lines[23].contains("Enter/Esc done"));
    }

    #[test]
    fn test_render_filtered_page_collapses_page_bar() {
        // Comedy has four movies, a single page at the default page size
        let state = type_keys(
            loaded_state(),
            vec![KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::Enter],
        );
        let buf = render_to_buffer(&state, RENDER_WIDTH, 24);
        let lines = buffer_lines(&buf);

        assert!(lines[0].contains("Showing 4 movies in the database."));
        assert!(!lines[21].contains("["));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let state = loaded_state();
        let buf = render_to_buffer(&state, 30, 6);
        let lines = buffer_lines(&buf);

        // The movie table needs more room than this, the genre panel still shows
        assert!(lines[0].contains("Genres"));
    }
}
