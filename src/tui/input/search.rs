use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

pub(super) fn begin_search(app: &mut App) {
    app.mode = Mode::Search;
    app.search_input.clear();
}

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.last_search = if app.search_input.is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.mode = Mode::Navigate;
            if app.last_search.is_some() {
                // Land on a match right away
                let matches = app.match_indices();
                if let Some(&first) = matches.first()
                    && !matches.contains(&app.cursor)
                {
                    app.cursor = first;
                }
            }
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        KeyCode::Backspace => {
            if let Some(prev) =
                unicode::prev_grapheme_boundary(&app.search_input, app.search_input.len())
            {
                app.search_input.truncate(prev);
            }
        }
        _ => {}
    }
}
