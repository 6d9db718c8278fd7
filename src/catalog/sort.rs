/// Movie ordering
///
/// Sorting is stable: rows that compare equal keep their collection
/// order, in both directions. Ratings and rates are floats, so the
/// comparison treats incomparable values (NaN) as equal instead of
/// panicking.
use std::cmp::Ordering;

use crate::types::{Movie, SortField, SortOrder, SortSpec};

/// Return a sorted copy of `movies` according to `sort`.
pub fn sort_movies(movies: &[Movie], sort: &SortSpec) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare_by_field(a, b, sort.field);
        match sort.order {
            SortOrder::Asc => ord,
            // Equal stays Equal under reverse, so ties keep their order
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare_by_field(a: &Movie, b: &Movie, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Genre => a.genre.name.cmp(&b.genre.name),
        SortField::Rating => compare_f64(a.rating, b.rating),
        SortField::Rate => compare_f64(a.daily_rental_rate, b.daily_rental_rate),
    }
}

fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
