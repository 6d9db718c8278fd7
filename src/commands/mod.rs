pub mod genres;
pub mod list;

use anyhow::{bail, Result};

use crate::types::Genre;

/// Resolve a genre name to its catalog entry
///
/// Matching is case-insensitive. Returns an error naming the valid
/// genres when nothing matches.
pub fn resolve_genre(genres: &[Genre], name: &str) -> Result<Genre> {
    if let Some(genre) = genres.iter().find(|g| g.name.eq_ignore_ascii_case(name)) {
        return Ok(genre.clone());
    }

    let known: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
    bail!("Unknown genre '{}'. Known genres: {}", name, known.join(", "))
}
