/// Derived movie view
///
/// Everything shown in the movie table is computed on demand from
/// [`CatalogState`]: filter, then sort, then slice out the current
/// page. Nothing is cached; recomputing from an unchanged state gives
/// an identical result.
use crate::types::Movie;

use super::paginate::paginate;
use super::sort::sort_movies;
use super::state::CatalogState;

/// One page of movies plus the size of the filtered collection it was
/// cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedMovies {
    /// Movies matching the active filter, before pagination.
    pub total_count: usize,
    /// The movies on the current page, in display order.
    pub movies: Vec<Movie>,
}

impl PagedMovies {
    /// Number of pages the filtered collection spans.
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total_count.div_ceil(page_size)
    }
}

/// Count line shown above the table
///
/// The no-movies message depends on the collection being empty, not on
/// the filter result. A search with no matches still reports a count.
pub fn count_message(state: &CatalogState, view: &PagedMovies) -> String {
    if state.movies.is_empty() {
        "There are no movies in the database".to_string()
    } else {
        format!("Showing {} movies in the database.", view.total_count)
    }
}

/// Compute the page of movies the current state describes.
pub fn paged_movies(state: &CatalogState) -> PagedMovies {
    let filtered = filter_movies(state);
    let sorted = sort_movies(&filtered, &state.sort);
    let movies = paginate(&sorted, state.current_page, state.page_size);

    PagedMovies {
        total_count: filtered.len(),
        movies,
    }
}

/// Apply the active filter. Search wins over genre; they never combine.
fn filter_movies(state: &CatalogState) -> Vec<Movie> {
    if state.searching() {
        let needle = state.search_text.to_lowercase();
        return state
            .movies
            .iter()
            .filter(|m| m.title.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();
    }

    match &state.selected_genre {
        Some(genre) if !genre.is_all() => state
            .movies
            .iter()
            .filter(|m| m.genre.id == genre.id)
            .cloned()
            .collect(),
        _ => state.movies.to_vec(),
    }
}
