/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. The in-memory catalog backing the app - there is no remote service
/// 3. Benchmarks - providing consistent data for performance testing
///
/// Identifiers are stable strings so tests can reference entries directly.
use crate::types::{Genre, Movie};

pub fn create_genres() -> Vec<Genre> {
    vec![
        Genre::new("g-action", "Action"),
        Genre::new("g-comedy", "Comedy"),
        Genre::new("g-thriller", "Thriller"),
    ]
}

pub fn create_movies() -> Vec<Movie> {
    let action = Genre::new("g-action", "Action");
    let comedy = Genre::new("g-comedy", "Comedy");
    let thriller = Genre::new("g-thriller", "Thriller");

    vec![
        create_movie("m01", "Terminator", &action, 8.1, true, 2.5),
        create_movie("m02", "Die Hard", &action, 8.2, false, 2.5),
        create_movie("m03", "Get Shorty", &comedy, 6.9, false, 2.5),
        create_movie("m04", "Showgirls", &comedy, 4.9, false, 2.5),
        create_movie("m05", "Wedding Crashers", &comedy, 7.0, false, 3.5),
        create_movie("m06", "Airplane", &comedy, 7.7, false, 3.5),
        create_movie("m07", "The Sixth Sense", &thriller, 8.2, false, 3.5),
        create_movie("m08", "Gone Girl", &thriller, 8.1, false, 4.5),
        create_movie("m09", "The Avengers", &action, 8.0, false, 2.5),
    ]
}

fn create_movie(
    id: &str,
    title: &str,
    genre: &Genre,
    rating: f64,
    liked: bool,
    daily_rental_rate: f64,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        genre: genre.clone(),
        rating,
        liked,
        daily_rental_rate,
    }
}
