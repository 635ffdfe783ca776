use crossterm::event::KeyEvent;

use crate::ops::item_ops;

use crate::tui::app::{App, Mode};

use super::common::{LineOutcome, handle_line_key};

/// Open the input row for a new item.
pub(super) fn begin_insert(app: &mut App) {
    app.mode = Mode::Insert;
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_key = None;
}

/// Start rewriting the item under the cursor in place.
pub(super) fn begin_edit(app: &mut App) {
    let Some(key) = app.cursor_key() else { return };
    let Some(item) = app.items.iter().find(|i| i.key == key) else {
        return;
    };
    app.edit_buffer = item.text.clone();
    app.edit_cursor = app.edit_buffer.len();
    app.edit_key = Some(key);
    app.mode = Mode::Edit;

    let new_items = item_ops::toggle_editing(&app.items, key, true);
    app.commit(new_items);
}

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match handle_line_key(&mut app.edit_buffer, &mut app.edit_cursor, key) {
        LineOutcome::Submit => {
            // add_item ignores whitespace-only text; either way the row
            // clears for the next entry
            let new_items = item_ops::add_item(&app.items, &app.edit_buffer);
            app.commit(new_items);
            app.edit_buffer.clear();
            app.edit_cursor = 0;
        }
        LineOutcome::Cancel => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        LineOutcome::Consumed => {}
    }
}

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match handle_line_key(&mut app.edit_buffer, &mut app.edit_cursor, key) {
        LineOutcome::Submit => {
            if let Some(item_key) = app.edit_key.take() {
                let new_items = item_ops::update_text(&app.items, item_key, &app.edit_buffer);
                let new_items = item_ops::toggle_editing(&new_items, item_key, false);
                app.commit(new_items);
            }
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        LineOutcome::Cancel => {
            if let Some(item_key) = app.edit_key.take() {
                let new_items = item_ops::toggle_editing(&app.items, item_key, false);
                app.commit(new_items);
            }
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.mode = Mode::Navigate;
        }
        LineOutcome::Consumed => {}
    }
}
