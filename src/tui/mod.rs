// Module declarations
pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod widgets;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::{AppState, Focus};

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Terminal,
};

use crate::catalog::{count_message, CatalogAction};
use crate::config::{Config, DisplayConfig};
use crate::data_provider::CatalogProvider;
use crate::tui::widgets::{
    GenreList, MovieTable, PageBar, RenderableWidget, SearchBox, StatusBar,
};

/// Main entry point for TUI mode
pub fn run(provider: &dyn CatalogProvider, config: &Config) -> Result<()> {
    // Setup terminal
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    // Load the catalog into the initial state
    let mut state = reduce(
        AppState::default(),
        Action::Catalog(CatalogAction::Load {
            movies: provider.list_movies(),
            genres: provider.list_genres(),
        }),
    );

    let result = loop {
        terminal
            .draw(|f| {
                let area = f.area();
                render_app(&state, &config.display, area, f.buffer_mut());
            })
            .context("failed to draw frame")?;

        if event::poll(Duration::from_millis(100)).context("event polling failed")? {
            if let Event::Key(key_event) = event::read().context("failed to read event")? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key_event, &state) {
                    if matches!(action, Action::Quit) {
                        tracing::debug!("LOOP: quitting");
                        break Ok(());
                    }
                    state = reduce(state, action);
                }
            }
        }
    };

    cleanup_terminal(&mut terminal)?;
    result
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

/// Render the whole application into a buffer
///
/// Kept separate from the terminal loop so tests can render into a
/// plain Buffer without a terminal.
pub fn render_app(state: &AppState, config: &DisplayConfig, area: Rect, buf: &mut Buffer) {
    let view = state.view();
    let count = count_message(&state.catalog, &view);
    let page_count = view.page_count(state.catalog.page_size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panels
            Constraint::Length(2), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Genre panel
            Constraint::Min(0),     // Movie column
        ])
        .split(chunks[0]);

    let column = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Count message
            Constraint::Length(1), // Search field
            Constraint::Min(0),    // Movie table
            Constraint::Length(1), // Page bar
        ])
        .split(panels[1]);

    // While search entry is active the panels give up their focus styling
    let genre_focused = state.ui.focus == Focus::GenreList && !state.ui.search_active;
    let table_focused = state.ui.focus == Focus::MovieTable && !state.ui.search_active;

    let genre_list = GenreList::new(
        state.catalog.genres.clone(),
        state.catalog.selected_genre.clone(),
        state.ui.genre_cursor,
        genre_focused,
    );
    genre_list.render(panels[0], buf, config);

    if column[0].height > 0 {
        buf.set_string(column[0].x, column[0].y, &count, Style::default());
    }

    let search_box = SearchBox::new(state.catalog.search_text.clone(), state.ui.search_active);
    search_box.render(column[1], buf, config);

    let movie_table = MovieTable::new(
        view.movies,
        state.catalog.sort,
        state.ui.movie_cursor,
        table_focused,
    );
    movie_table.render(column[2], buf, config);

    let page_bar = PageBar::new(state.catalog.current_page, page_count);
    page_bar.render(column[3], buf, config);

    let status_bar = StatusBar::for_mode(state.ui.focus, state.ui.search_active);
    status_bar.render(chunks[1], buf, config);
}
