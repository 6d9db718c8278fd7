use tracing::{debug, trace};

use crate::types::Genre;

use super::action::CatalogAction;
use super::state::CatalogState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state.
/// This function is PURE - no side effects, no I/O.
/// The same state and action always produce the same result.
pub fn reduce(state: CatalogState, action: CatalogAction) -> CatalogState {
    match action {
        CatalogAction::Load { movies, genres } => {
            debug!(
                "DATA: Loaded {} movies and {} genres",
                movies.len(),
                genres.len()
            );
            let mut new_state = state.clone();
            new_state.movies = movies;
            // The selectable list always starts with the synthetic entry
            new_state.genres = std::iter::once(Genre::all_genres()).chain(genres).collect();
            new_state
        }

        CatalogAction::Delete(id) => {
            debug!("DATA: Deleting movie {}", id);
            let mut new_state = state.clone();
            new_state.movies.retain(|m| m.id != id);
            trace!("  {} movies remain", new_state.movies.len());
            // The page is deliberately left alone, even if it is now past
            // the end. The view yields an empty page in that case.
            new_state
        }

        CatalogAction::LikeToggle(id) => {
            debug!("DATA: Toggling like on movie {}", id);
            let mut new_state = state.clone();
            if let Some(movie) = new_state.movies.iter_mut().find(|m| m.id == id) {
                movie.liked = !movie.liked;
            }
            new_state
        }

        CatalogAction::GenreSelect(genre) => {
            debug!("FILTER: Selecting genre {:?}", genre.name);
            let mut new_state = state.clone();
            new_state.selected_genre = Some(genre);
            new_state.search_text.clear();
            new_state.current_page = 1;
            new_state
        }

        CatalogAction::SortChange(sort) => {
            debug!("SORT: {:?} {:?}", sort.field, sort.order);
            let mut new_state = state.clone();
            new_state.sort = sort;
            new_state
        }

        CatalogAction::SearchChange(text) => {
            debug!("FILTER: Search text {:?}", text);
            let mut new_state = state.clone();
            new_state.search_text = text;
            new_state.selected_genre = None;
            new_state.current_page = 1;
            new_state
        }

        CatalogAction::PageChange(page) => {
            debug!("PAGE: Changing to page {}", page);
            let mut new_state = state.clone();
            // Stored verbatim. Pages past the end render empty rather
            // than being clamped here.
            new_state.current_page = page;
            new_state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::types::{SortField, SortOrder, SortSpec};

    fn loaded_state() -> CatalogState {
        reduce(
            CatalogState::default(),
            CatalogAction::Load {
                movies: fixtures::create_movies(),
                genres: fixtures::create_genres(),
            },
        )
    }

    #[test]
    fn test_load_replaces_collections() {
        let state = loaded_state();
        assert_eq!(state.movies.len(), 9);
        // Three fixture genres plus the synthetic entry
        assert_eq!(state.genres.len(), 4);
    }

    #[test]
    fn test_load_prepends_all_genres_entry() {
        let state = loaded_state();
        assert!(state.genres[0].is_all());
        assert_eq!(state.genres[0].name, "All Genres");
        assert!(state.genres[1..].iter().all(|g| !g.is_all()));
    }

    #[test]
    fn test_load_keeps_view_settings() {
        let mut state = CatalogState::default();
        state.current_page = 3;
        state.search_text = "te".to_string();

        let new_state = reduce(
            state,
            CatalogAction::Load {
                movies: fixtures::create_movies(),
                genres: fixtures::create_genres(),
            },
        );

        assert_eq!(new_state.current_page, 3);
        assert_eq!(new_state.search_text, "te");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let state = loaded_state();
        let new_state = reduce(state.clone(), CatalogAction::Delete("m03".to_string()));

        assert_eq!(new_state.movies.len(), state.movies.len() - 1);
        assert!(!new_state.movies.iter().any(|m| m.id == "m03"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = loaded_state();
        let new_state = reduce(state.clone(), CatalogAction::Delete("nope".to_string()));
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_delete_does_not_move_page() {
        let mut state = loaded_state();
        state.current_page = 2;

        let new_state = reduce(state, CatalogAction::Delete("m01".to_string()));
        assert_eq!(new_state.current_page, 2);
    }

    #[test]
    fn test_like_toggle_flips_only_target() {
        let state = loaded_state();
        let new_state = reduce(state.clone(), CatalogAction::LikeToggle("m02".to_string()));

        for (before, after) in state.movies.iter().zip(new_state.movies.iter()) {
            if before.id == "m02" {
                assert_eq!(after.liked, !before.liked);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_like_toggle_twice_restores_state() {
        let state = loaded_state();
        let once = reduce(state.clone(), CatalogAction::LikeToggle("m05".to_string()));
        let twice = reduce(once, CatalogAction::LikeToggle("m05".to_string()));
        assert_eq!(twice, state);
    }

    #[test]
    fn test_like_toggle_unknown_id_is_noop() {
        let state = loaded_state();
        let new_state = reduce(state.clone(), CatalogAction::LikeToggle("nope".to_string()));
        assert_eq!(new_state, state);
    }

    #[test]
    fn test_genre_select_clears_search_and_resets_page() {
        let mut state = loaded_state();
        state.search_text = "te".to_string();
        state.current_page = 2;

        let genre = state.genres[1].clone();
        let new_state = reduce(state, CatalogAction::GenreSelect(genre.clone()));

        assert_eq!(new_state.selected_genre, Some(genre));
        assert_eq!(new_state.search_text, "");
        assert_eq!(new_state.current_page, 1);
    }

    #[test]
    fn test_search_change_clears_genre_and_resets_page() {
        let mut state = loaded_state();
        state.selected_genre = Some(state.genres[1].clone());
        state.current_page = 3;

        let new_state = reduce(state, CatalogAction::SearchChange("r".to_string()));

        assert_eq!(new_state.search_text, "r");
        assert!(new_state.selected_genre.is_none());
        assert_eq!(new_state.current_page, 1);
    }

    #[test]
    fn test_sort_change_keeps_page() {
        let mut state = loaded_state();
        state.current_page = 2;

        let sort = SortSpec::new(SortField::Rating, SortOrder::Desc);
        let new_state = reduce(state, CatalogAction::SortChange(sort));

        assert_eq!(new_state.sort, sort);
        assert_eq!(new_state.current_page, 2);
    }

    #[test]
    fn test_page_change_stores_verbatim() {
        let state = loaded_state();
        let new_state = reduce(state, CatalogAction::PageChange(42));
        assert_eq!(new_state.current_page, 42);
    }

    #[test]
    fn test_reduce_leaves_input_usable() {
        // Callers pass a clone when they keep the old state around
        let state = loaded_state();
        let snapshot = state.clone();
        let _ = reduce(state.clone(), CatalogAction::Delete("m01".to_string()));
        assert_eq!(state, snapshot);
    }
}
