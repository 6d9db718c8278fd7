use tracing::{debug, trace};

use crate::catalog::{self, CatalogAction};

use super::action::Action;
use super::state::{AppState, Focus};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state.
/// This function is PURE - no side effects, no I/O.
/// Catalog actions are delegated to the catalog reducer; everything
/// else manipulates interface state, clamping cursors and pages so the
/// interface can never select a row or page that does not exist.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::Catalog(catalog_action) => {
            let mut new_state = state.clone();
            new_state.catalog = catalog::reduce(state.catalog, catalog_action);
            clamp_cursors(new_state)
        }

        Action::FocusNext => {
            debug!("FOCUS: Next panel");
            let mut new_state = state.clone();
            new_state.ui.focus = state.ui.focus.next();
            new_state
        }

        Action::FocusPrevious => {
            debug!("FOCUS: Previous panel");
            let mut new_state = state.clone();
            new_state.ui.focus = state.ui.focus.prev();
            new_state
        }

        Action::CursorUp => {
            let mut new_state = state.clone();
            match state.ui.focus {
                Focus::MovieTable => {
                    new_state.ui.movie_cursor = state.ui.movie_cursor.saturating_sub(1);
                }
                Focus::GenreList => {
                    new_state.ui.genre_cursor = state.ui.genre_cursor.saturating_sub(1);
                }
            }
            new_state
        }

        Action::CursorDown => {
            let mut new_state = state.clone();
            match state.ui.focus {
                Focus::MovieTable => {
                    let max = state.view().movies.len().saturating_sub(1);
                    new_state.ui.movie_cursor = (state.ui.movie_cursor + 1).min(max);
                }
                Focus::GenreList => {
                    let max = state.catalog.genres.len().saturating_sub(1);
                    new_state.ui.genre_cursor = (state.ui.genre_cursor + 1).min(max);
                }
            }
            new_state
        }

        Action::ApplyGenre => {
            if let Some(genre) = state.genre_under_cursor().cloned() {
                debug!("ACTION: Applying genre {}", genre.name);
                let mut new_state = state.clone();
                new_state.catalog =
                    catalog::reduce(state.catalog, CatalogAction::GenreSelect(genre));
                new_state.ui.movie_cursor = 0;
                new_state
            } else {
                state
            }
        }

        Action::SearchStart => {
            debug!("FOCUS: Entering search entry");
            let mut new_state = state.clone();
            new_state.ui.search_active = true;
            new_state
        }

        Action::SearchExit => {
            debug!("FOCUS: Leaving search entry");
            let mut new_state = state.clone();
            new_state.ui.search_active = false;
            new_state
        }

        Action::SearchInput(c) => {
            let mut text = state.catalog.search_text.clone();
            text.push(c);
            let mut new_state = state.clone();
            new_state.catalog = catalog::reduce(state.catalog, CatalogAction::SearchChange(text));
            new_state.ui.movie_cursor = 0;
            new_state
        }

        Action::SearchBackspace => {
            let mut text = state.catalog.search_text.clone();
            if text.pop().is_none() {
                // Nothing to delete; leaving the state alone keeps an
                // active genre filter intact
                trace!("  Search text already empty");
                state
            } else {
                let mut new_state = state.clone();
                new_state.catalog =
                    catalog::reduce(state.catalog, CatalogAction::SearchChange(text));
                new_state.ui.movie_cursor = 0;
                new_state
            }
        }

        Action::PagePrevious => {
            let page_count = state.view().page_count(state.catalog.page_size).max(1);
            let target = state.catalog.current_page.saturating_sub(1).clamp(1, page_count);
            change_page(state, target)
        }

        Action::PageNext => {
            let page_count = state.view().page_count(state.catalog.page_size).max(1);
            let target = (state.catalog.current_page + 1).min(page_count);
            change_page(state, target)
        }

        Action::PageJump(page) => {
            let page_count = state.view().page_count(state.catalog.page_size);
            if (1..=page_count).contains(&page) {
                change_page(state, page)
            } else {
                trace!("PAGE: Ignoring jump to page {} of {}", page, page_count);
                state
            }
        }

        Action::SortCycleField => {
            let sort = state.catalog.sort.cycled();
            let mut new_state = state.clone();
            new_state.catalog = catalog::reduce(state.catalog, CatalogAction::SortChange(sort));
            new_state
        }

        Action::SortToggleOrder => {
            let sort = state.catalog.sort.toggled();
            let mut new_state = state.clone();
            new_state.catalog = catalog::reduce(state.catalog, CatalogAction::SortChange(sort));
            new_state
        }

        Action::LikeSelected => {
            if let Some(id) = state.selected_movie_id() {
                debug!("ACTION: Toggling like on {}", id);
                let mut new_state = state.clone();
                new_state.catalog = catalog::reduce(state.catalog, CatalogAction::LikeToggle(id));
                new_state
            } else {
                state
            }
        }

        Action::DeleteSelected => {
            if let Some(id) = state.selected_movie_id() {
                debug!("ACTION: Deleting {}", id);
                let mut new_state = state.clone();
                new_state.catalog = catalog::reduce(state.catalog, CatalogAction::Delete(id));
                clamp_cursors(new_state)
            } else {
                state
            }
        }

        // Handled by the event loop; the state does not change
        Action::Quit => state,
    }
}

/// Move to `target` if it differs from the current page
fn change_page(state: AppState, target: usize) -> AppState {
    if target == state.catalog.current_page {
        trace!("PAGE: Already on page {}", target);
        return state;
    }
    let mut new_state = state.clone();
    new_state.catalog = catalog::reduce(state.catalog, CatalogAction::PageChange(target));
    new_state.ui.movie_cursor = 0;
    new_state
}

/// Keep cursors inside the rows that actually exist
fn clamp_cursors(mut state: AppState) -> AppState {
    let visible = state.view().movies.len();
    state.ui.movie_cursor = state.ui.movie_cursor.min(visible.saturating_sub(1));
    let genre_count = state.catalog.genres.len();
    state.ui.genre_cursor = state.ui.genre_cursor.min(genre_count.saturating_sub(1));
    state
}
