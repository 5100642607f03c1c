//! Keyboard Input Handler
//!
//! All typing goes to the search box, so navigation uses non-character keys
//! (arrows, Tab, Enter, Esc). While the modal is open it captures every key
//! and the panes behind it are inert.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use flicktui::model::{Focus, UiModel};

use crate::App;

/// Handle a key press
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits, modal or not
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.modal_open() {
        handle_modal_key(app, key);
    } else {
        handle_browse_key(app, key);
    }
}

/// Keys while the modal is open. Everything not listed is swallowed so the
/// search box and lists behind the overlay cannot change.
fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_modal();
        }
        KeyCode::Up => {
            if let Some(modal) = app.model.ui.modal.as_mut() {
                modal.scroll_offset = modal.scroll_offset.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if let Some(modal) = app.model.ui.modal.as_mut() {
                modal.scroll_offset = modal.scroll_offset.saturating_add(1);
            }
        }
        _ => {}
    }
}

/// Keys in the main browse view
fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // First Esc clears the search, second quits
            if app.model.search.is_empty() {
                app.model.ui.should_quit = true;
            } else {
                app.model.search.clear();
            }
        }

        KeyCode::Enter => open_selected(app),

        KeyCode::Tab => {
            // The trending strip is only focusable when it has content
            app.model.ui.focus = match app.model.ui.focus {
                Focus::Results if !app.model.catalog.trending.is_empty() => Focus::Trending,
                _ => Focus::Results,
            };
        }

        KeyCode::Up => match app.model.ui.focus {
            Focus::Results => app.model.catalog.select_previous(),
            Focus::Trending => app.model.catalog.select_previous_trending(),
        },
        KeyCode::Down => match app.model.ui.focus {
            Focus::Results => app.model.catalog.select_next(),
            Focus::Trending => app.model.catalog.select_next_trending(),
        },

        // The trending strip is horizontal
        KeyCode::Left if app.model.ui.focus == Focus::Trending => {
            app.model.catalog.select_previous_trending();
        }
        KeyCode::Right if app.model.ui.focus == Focus::Trending => {
            app.model.catalog.select_next_trending();
        }

        KeyCode::Backspace => app.model.search.pop_char(),
        KeyCode::Char(c) => app.model.search.push_char(c),

        _ => {}
    }
}

/// Open the modal for whatever the focused pane has selected
fn open_selected(app: &mut App) {
    match app.model.ui.focus {
        Focus::Results => {
            if let Some(movie) = app.model.catalog.selected_movie().cloned() {
                let poster_url = movie.poster_url();
                app.open_modal(movie, poster_url);
            }
        }
        Focus::Trending => {
            if let Some(record) = app.model.catalog.selected_trending() {
                let movie = UiModel::movie_from_trending(record);
                let poster_url = record.poster_url.clone();
                app.open_modal(movie, poster_url);
            }
        }
    }
}
