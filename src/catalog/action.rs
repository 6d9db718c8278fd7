/// Catalog actions
///
/// Every change to the catalog view state is described by one of these
/// values and applied by [`crate::catalog::reduce`]. State is never
/// mutated any other way.
use crate::types::{Genre, Movie, SortSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Replace the collection with freshly loaded data
    Load { movies: Vec<Movie>, genres: Vec<Genre> },
    /// Remove the movie with this identifier
    Delete(String),
    /// Flip the liked flag on the movie with this identifier
    LikeToggle(String),
    /// Make this genre the active filter
    GenreSelect(Genre),
    /// Replace the sort field and direction
    SortChange(SortSpec),
    /// Replace the search text
    SearchChange(String),
    /// Jump to a page (1-based)
    PageChange(usize),
}
