use crate::catalog::{count_message, paged_movies, reduce, CatalogAction, CatalogState};
use crate::commands::resolve_genre;
use crate::config::{Config, DisplayConfig};
use crate::data_provider::CatalogProvider;
use crate::formatting::fit_width;
use crate::types::{SortField, SortOrder, SortSpec};
use anyhow::Result;

// Layout Constants
/// Width of title column
const TITLE_COL_WIDTH: usize = 24;

/// Width of genre column
const GENRE_COL_WIDTH: usize = 10;

/// Width of rating column
const RATING_COL_WIDTH: usize = 6;

/// Width of daily rental rate column
const RATE_COL_WIDTH: usize = 6;

/// Width of liked column
const LIKED_COL_WIDTH: usize = 5;

/// Total table width (columns plus single-space separators)
const TABLE_WIDTH: usize =
    TITLE_COL_WIDTH + GENRE_COL_WIDTH + RATING_COL_WIDTH + RATE_COL_WIDTH + LIKED_COL_WIDTH + 4;

/// Column label with the sort indicator appended on the active field
fn column_label(label: &str, field: SortField, sort: &SortSpec, display: &DisplayConfig) -> String {
    if sort.field != field {
        return label.to_string();
    }
    let arrow = match sort.order {
        SortOrder::Asc => &display.box_chars.sort_asc,
        SortOrder::Desc => &display.box_chars.sort_desc,
    };
    format!("{} {}", label, arrow)
}

pub fn format_movie_table(state: &CatalogState, display: &DisplayConfig) -> String {
    let view = paged_movies(state);
    let mut output = String::new();

    output.push_str(&format!("{}\n", count_message(state, &view)));
    if state.movies.is_empty() {
        return output;
    }
    output.push('\n');

    // Print table header
    output.push_str(&format!(
        "{} {} {:>rating_width$} {:>rate_width$} {:^liked_width$}\n",
        fit_width(
            &column_label("Title", SortField::Title, &state.sort, display),
            TITLE_COL_WIDTH
        ),
        fit_width(
            &column_label("Genre", SortField::Genre, &state.sort, display),
            GENRE_COL_WIDTH
        ),
        column_label("Rating", SortField::Rating, &state.sort, display),
        column_label("Rate", SortField::Rate, &state.sort, display),
        "Liked",
        rating_width = RATING_COL_WIDTH,
        rate_width = RATE_COL_WIDTH,
        liked_width = LIKED_COL_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(TABLE_WIDTH)
    ));

    // Print each movie row
    for movie in &view.movies {
        let liked = if movie.liked {
            &display.box_chars.liked
        } else {
            &display.box_chars.not_liked
        };
        output.push_str(&format!(
            "{} {} {:>rating_width$.1} {:>rate_width$.2} {:^liked_width$}\n",
            fit_width(&movie.title, TITLE_COL_WIDTH),
            fit_width(&movie.genre.name, GENRE_COL_WIDTH),
            movie.rating,
            movie.daily_rental_rate,
            liked,
            rating_width = RATING_COL_WIDTH,
            rate_width = RATE_COL_WIDTH,
            liked_width = LIKED_COL_WIDTH
        ));
    }

    // Page indicator, only when there is more than one page
    let page_count = view.page_count(state.page_size);
    if page_count > 1 {
        output.push_str(&format!(
            "\nPage {} of {}\n",
            state.current_page, page_count
        ));
    }

    output
}

pub fn run(
    provider: &dyn CatalogProvider,
    search: Option<String>,
    genre: Option<String>,
    sort: SortSpec,
    page: usize,
    page_size: Option<usize>,
    config: &Config,
) -> Result<()> {
    let mut state = CatalogState {
        page_size: page_size.unwrap_or(config.page_size),
        ..CatalogState::default()
    };
    state = reduce(
        state,
        CatalogAction::Load {
            movies: provider.list_movies(),
            genres: provider.list_genres(),
        },
    );

    if let Some(name) = genre {
        let genre = resolve_genre(&provider.list_genres(), &name)?;
        state = reduce(state, CatalogAction::GenreSelect(genre));
    }
    if let Some(text) = search {
        state = reduce(state, CatalogAction::SearchChange(text));
    }
    state = reduce(state, CatalogAction::SortChange(sort));
    // Applied last; filter changes reset the page to 1
    state = reduce(state, CatalogAction::PageChange(page));

    let output = format_movie_table(&state, &config.display);
    print!("{}", output);

    Ok(())
}
