mod common;
mod edit;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use search::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        handle_help_overlay(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Search => handle_search(app, key),
    }
}

/// Handle a bracketed paste (terminal delivers pasted text as one string).
/// Only meaningful while a line editor is open; newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if !matches!(app.mode, Mode::Insert | Mode::Edit) || text.is_empty() {
        return;
    }
    let clean = text.replace(['\n', '\r'], " ");
    app.edit_buffer.insert_str(app.edit_cursor, &clean);
    app.edit_cursor += clean.len();
}
