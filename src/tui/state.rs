use crate::catalog::{paged_movies, CatalogState, PagedMovies};
use crate::types::Genre;

/// Root application state - single source of truth
///
/// This is the entire application state in one place.
/// All state changes happen through the reducer.
/// Widgets receive slices of this state as props.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Catalog data and view settings
    pub catalog: CatalogState,

    /// Interactive state that exists only inside the TUI
    pub ui: UiState,
}

/// Which panel receives cursor keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    GenreList,
    MovieTable,
}

impl Focus {
    /// With two panels, next and previous are both a toggle
    pub fn next(&self) -> Self {
        match self {
            Self::GenreList => Self::MovieTable,
            Self::MovieTable => Self::GenreList,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Panel that owns cursor movement
    pub focus: Focus,
    /// Selected row in the movie table, indexed within the visible page
    pub movie_cursor: usize,
    /// Selected row in the genre list
    pub genre_cursor: usize,
    /// True while keystrokes go to the search field
    pub search_active: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: Focus::MovieTable,
            movie_cursor: 0,
            genre_cursor: 0,
            search_active: false,
        }
    }
}

impl AppState {
    /// Derived page of movies for the current catalog state
    pub fn view(&self) -> PagedMovies {
        paged_movies(&self.catalog)
    }

    /// Identifier of the movie under the cursor, if any
    pub fn selected_movie_id(&self) -> Option<String> {
        self.view()
            .movies
            .get(self.ui.movie_cursor)
            .map(|m| m.id.clone())
    }

    /// Genre under the cursor in the genre list
    pub fn genre_under_cursor(&self) -> Option<&Genre> {
        self.catalog.genres.get(self.ui.genre_cursor)
    }
}
