/// MovieTable widget - displays one page of the movie catalog
///
/// This widget renders the visible page as a table with a header row, a
/// separator, and one row per movie. The active sort field carries an
/// indicator in its header and the cursor row is highlighted.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::DisplayConfig;
use crate::formatting::fit_width;
use crate::tui::widgets::RenderableWidget;
use crate::types::{Movie, SortField, SortOrder, SortSpec};

/// Constants for movie table layout
const SELECTOR_COL_WIDTH: usize = 2;
const TITLE_COL_WIDTH: usize = 22;
const GENRE_COL_WIDTH: usize = 10;
const RATING_COL_WIDTH: usize = 8;
const RATE_COL_WIDTH: usize = 6;
const LIKED_COL_WIDTH: usize = 5;
const TABLE_WIDTH: usize = SELECTOR_COL_WIDTH
    + TITLE_COL_WIDTH
    + GENRE_COL_WIDTH
    + RATING_COL_WIDTH
    + RATE_COL_WIDTH
    + LIKED_COL_WIDTH
    + 4;

/// Widget for displaying the current page of movies
#[derive(Debug, Clone)]
pub struct MovieTable {
    /// Movies on the visible page, in display order
    pub movies: Vec<Movie>,
    /// Active sort, drives the header indicator
    pub sort: SortSpec,
    /// Row under the cursor
    pub cursor: usize,
    /// Whether this panel has focus
    pub focused: bool,
}

impl MovieTable {
    pub fn new(movies: Vec<Movie>, sort: SortSpec, cursor: usize, focused: bool) -> Self {
        Self {
            movies,
            sort,
            cursor,
            focused,
        }
    }

    /// Column label with the sort indicator appended on the active field
    fn column_label(&self, label: &str, field: SortField, config: &DisplayConfig) -> String {
        if self.sort.field != field {
            return label.to_string();
        }
        let arrow = match self.sort.order {
            SortOrder::Asc => &config.box_chars.sort_asc,
            SortOrder::Desc => &config.box_chars.sort_desc,
        };
        format!("{} {}", label, arrow)
    }

    /// Get the cursor row style based on focus state
    fn selection_style(&self, config: &DisplayConfig) -> Style {
        if self.focused {
            Style::default().fg(config.selection_fg)
        } else {
            Style::default().fg(config.unfocused_selection_fg())
        }
    }

    fn render_header_row(&self, buf: &mut Buffer, x: u16, y: u16, config: &DisplayConfig) {
        let header = format!(
            "{}{} {} {:>rating_width$} {:>rate_width$} {:^liked_width$}",
            " ".repeat(SELECTOR_COL_WIDTH),
            fit_width(
                &self.column_label("Title", SortField::Title, config),
                TITLE_COL_WIDTH
            ),
            fit_width(
                &self.column_label("Genre", SortField::Genre, config),
                GENRE_COL_WIDTH
            ),
            self.column_label("Rating", SortField::Rating, config),
            self.column_label("Rate", SortField::Rate, config),
            "Liked",
            rating_width = RATING_COL_WIDTH,
            rate_width = RATE_COL_WIDTH,
            liked_width = LIKED_COL_WIDTH
        );
        buf.set_string(x, y, &header, Style::default().fg(config.header_fg));
    }

    fn render_separator(&self, buf: &mut Buffer, x: u16, y: u16, config: &DisplayConfig) {
        let line = config.box_chars.horizontal.repeat(TABLE_WIDTH);
        buf.set_string(x, y, &line, Style::default());
    }

    fn render_movie_row(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        movie: &Movie,
        selected: bool,
        config: &DisplayConfig,
    ) {
        let selector = if selected {
            format!("{} ", config.box_chars.selector)
        } else {
            " ".repeat(SELECTOR_COL_WIDTH)
        };
        let liked = if movie.liked {
            &config.box_chars.liked
        } else {
            &config.box_chars.not_liked
        };

        let line = format!(
            "{}{} {} {:>rating_width$.1} {:>rate_width$.2} {:^liked_width$}",
            selector,
            fit_width(&movie.title, TITLE_COL_WIDTH),
            fit_width(&movie.genre.name, GENRE_COL_WIDTH),
            movie.rating,
            movie.daily_rental_rate,
            liked,
            rating_width = RATING_COL_WIDTH,
            rate_width = RATE_COL_WIDTH,
            liked_width = LIKED_COL_WIDTH
        );

        let style = if selected {
            self.selection_style(config)
        } else {
            Style::default()
        };
        buf.set_string(x, y, &line, style);

        // The liked heart keeps its own color on unselected rows
        if movie.liked && !selected {
            let liked_x = x + (TABLE_WIDTH - LIKED_COL_WIDTH + LIKED_COL_WIDTH / 2) as u16;
            buf.set_string(liked_x, y, liked, Style::default().fg(config.liked_fg));
        }
    }
}

impl RenderableWidget for MovieTable {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < 3 || area.width < TABLE_WIDTH as u16 {
            return; // Not enough space
        }

        self.render_header_row(buf, area.x, area.y, config);
        self.render_separator(buf, area.x, area.y + 1, config);

        for (i, movie) in self.movies.iter().enumerate() {
            let y = area.y + 2 + i as u16;
            if y >= area.bottom() {
                break;
            }
            self.render_movie_row(buf, area.x, y, movie, i == self.cursor, config);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2 + self.movies.len() as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(TABLE_WIDTH as u16)
    }
}
