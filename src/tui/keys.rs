/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
/// It contains all the keyboard navigation logic for the TUI.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use super::action::Action;
use super::state::{AppState, Focus};

/// Handle keystrokes while the search field is being edited
///
/// Search entry captures printable keys so typing "q" or "s" extends
/// the search instead of triggering shortcuts.
fn handle_search_entry_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::SearchExit),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Handle global keys that work regardless of focus
fn handle_global_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::SearchStart),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Left => Some(Action::PagePrevious),
        KeyCode::Right => Some(Action::PageNext),
        KeyCode::Char('s') => Some(Action::SortCycleField),
        KeyCode::Char('o') => Some(Action::SortToggleOrder),
        _ => None,
    }
}

/// Handle page jumps via number keys (1-9)
fn handle_number_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let page = c.to_digit(10)? as usize;
            Some(Action::PageJump(page))
        }
        _ => None,
    }
}

/// Handle keys owned by the focused panel
fn handle_panel_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        _ => match state.ui.focus {
            Focus::GenreList => match key_code {
                KeyCode::Enter => Some(Action::ApplyGenre),
                _ => None,
            },
            Focus::MovieTable => match key_code {
                KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::LikeSelected),
                KeyCode::Char('x') | KeyCode::Delete => Some(Action::DeleteSelected),
                _ => None,
            },
        },
    }
}

/// Convert a KeyEvent into an Action based on current application state
///
/// This function implements all keyboard navigation:
/// - Search entry mode captures keys while active (/ to enter, Esc/Enter to leave)
/// - Global keys (q/Q, Tab, Left/Right paging, s/o sorting, 1-9 page jumps)
/// - Panel keys depending on focus (cursor movement, Enter, like, delete)
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!(
        "KEY: {:?} (focus={:?}, search_active={})",
        key.code,
        state.ui.focus,
        state.ui.search_active
    );

    // 1. Search entry captures keys first so typed text never triggers shortcuts
    if state.ui.search_active {
        return handle_search_entry_keys(key.code);
    }

    // 2. Global keys
    if let Some(action) = handle_global_keys(key.code) {
        return Some(action);
    }

    // 3. Number keys jump straight to a page
    if let Some(action) = handle_number_keys(key.code) {
        return Some(action);
    }

    // 4. Keys owned by the focused panel
    handle_panel_keys(key.code, state)
}
