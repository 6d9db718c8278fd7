/// Trait for providing catalog data, abstracting over the data source
///
/// The shipped implementation is backed by the in-memory fixtures; tests
/// can substitute their own provider to exercise commands with custom data.
use crate::fixtures;
use crate::types::{Genre, Movie};

/// Trait for catalog data providers
pub trait CatalogProvider {
    /// Get all movies in the catalog
    fn list_movies(&self) -> Vec<Movie>;

    /// Get all genres, without the synthetic "All Genres" entry
    fn list_genres(&self) -> Vec<Genre>;
}

/// Catalog provider backed by the built-in fixture data
pub struct FixtureCatalog;

impl FixtureCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for FixtureCatalog {
    fn list_movies(&self) -> Vec<Movie> {
        fixtures::create_movies()
    }

    fn list_genres(&self) -> Vec<Genre> {
        fixtures::create_genres()
    }
}
