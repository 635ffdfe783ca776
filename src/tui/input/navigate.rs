use crossterm::event::{KeyCode, KeyEvent};

use crate::model::filter::{Filter, all_complete};
use crate::ops::item_ops;

use crate::tui::app::App;

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any key dismisses a transient status line
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }

        // --- Cursor movement ---
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // --- Mutations ---
        KeyCode::Char('a') | KeyCode::Char('i') => {
            begin_insert(app);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            begin_edit(app);
        }
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            toggle_cursor_complete(app);
        }
        KeyCode::Char('d') => {
            if let Some(key) = app.cursor_key() {
                let new_items = item_ops::remove_item(&app.items, key);
                app.commit(new_items);
            }
        }
        KeyCode::Char('c') => {
            let new_items = item_ops::clear_completed(&app.items);
            app.commit(new_items);
        }
        KeyCode::Char('A') => {
            let target = !all_complete(&app.items);
            let new_items = item_ops::toggle_all_complete(&app.items, target);
            app.commit(new_items);
        }

        // --- Filter selection ---
        KeyCode::Tab => {
            app.set_filter(app.filter.next());
        }
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),

        // --- Search ---
        KeyCode::Char('/') => {
            begin_search(app);
        }
        KeyCode::Char('n') => app.jump_to_match(false),
        KeyCode::Char('N') => app.jump_to_match(true),

        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.last_search = None;
        }
        _ => {}
    }
}

pub(super) fn handle_help_overlay(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
    ) {
        app.show_help = false;
    }
}

fn toggle_cursor_complete(app: &mut App) {
    let Some(key) = app.cursor_key() else { return };
    let Some(item) = app.items.iter().find(|i| i.key == key) else {
        return;
    };
    let new_items = item_ops::toggle_complete(&app.items, key, !item.complete);
    app.commit(new_items);
}
