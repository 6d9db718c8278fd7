/// Catalog view state
///
/// A plain snapshot of everything the movie list view depends on. The
/// reducer replaces whole snapshots; nothing here is mutated in place
/// outside of it. Rendering never reads anything but this struct, so
/// equal states always produce equal views.
use crate::types::{Genre, Movie, SortSpec};

/// Number of movies shown per page when no override is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Full movie collection, in load order. Never filtered in place.
    pub movies: Vec<Movie>,
    /// Selectable genres, with the synthetic "All Genres" entry first.
    pub genres: Vec<Genre>,
    /// Current page, 1-based.
    pub current_page: usize,
    /// Page size. Always at least 1.
    pub page_size: usize,
    /// Active genre filter. None or "All Genres" means no filtering.
    pub selected_genre: Option<Genre>,
    /// Active sort field and direction.
    pub sort: SortSpec,
    /// Title prefix filter. Empty means no search filtering.
    pub search_text: String,
}

impl CatalogState {
    /// True when the search filter is active. Search takes precedence
    /// over the genre filter; they are never applied together.
    pub fn searching(&self) -> bool {
        !self.search_text.is_empty()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            genres: Vec::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selected_genre: None,
            sort: SortSpec::default(),
            search_text: String::new(),
        }
    }
}
