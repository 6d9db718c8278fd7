use crate::config::{Config, DisplayConfig};
use crate::data_provider::CatalogProvider;
use crate::formatting::{fit_width, format_header};
use crate::types::{Genre, Movie};
use anyhow::Result;

/// Width of genre name column
const GENRE_NAME_COL_WIDTH: usize = 12;

/// Width of movie count column
const COUNT_COL_WIDTH: usize = 6;

pub fn format_genre_table(genres: &[Genre], movies: &[Movie], display: &DisplayConfig) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Genres", true, display));
    output.push('\n');

    output.push_str(&format!(
        "{} {:>count_width$}\n",
        fit_width("Genre", GENRE_NAME_COL_WIDTH),
        "Movies",
        count_width = COUNT_COL_WIDTH
    ));
    output.push_str(&format!(
        "{}\n",
        display
            .box_chars
            .horizontal
            .repeat(GENRE_NAME_COL_WIDTH + COUNT_COL_WIDTH + 1)
    ));

    for genre in genres {
        let count = movies.iter().filter(|m| m.genre.id == genre.id).count();
        output.push_str(&format!(
            "{} {:>count_width$}\n",
            fit_width(&genre.name, GENRE_NAME_COL_WIDTH),
            count,
            count_width = COUNT_COL_WIDTH
        ));
    }

    output
}

pub fn run(provider: &dyn CatalogProvider, config: &Config) -> Result<()> {
    let genres = provider.list_genres();
    let movies = provider.list_movies();

    let output = format_genre_table(&genres, &movies, &config.display);
    print!("{}", output);

    Ok(())
}
