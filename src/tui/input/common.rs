use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// What a line-editor key press amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LineOutcome {
    /// The buffer or cursor changed (or the key was swallowed)
    Consumed,
    /// Enter: the caller should act on the buffer
    Submit,
    /// Esc: the caller should discard the buffer
    Cancel,
}

/// Single-line editor shared by Insert and Edit modes. `cursor` is a byte
/// offset into `buffer`, always on a grapheme boundary.
pub(super) fn handle_line_key(
    buffer: &mut String,
    cursor: &mut usize,
    key: KeyEvent,
) -> LineOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => *cursor = 0,
            KeyCode::Char('e') => *cursor = buffer.len(),
            KeyCode::Char('u') => {
                buffer.drain(..*cursor);
                *cursor = 0;
            }
            KeyCode::Char('w') => {
                let start = unicode::word_boundary_left(buffer, *cursor);
                buffer.drain(start..*cursor);
                *cursor = start;
            }
            _ => {}
        }
        return LineOutcome::Consumed;
    }

    match key.code {
        KeyCode::Enter => LineOutcome::Submit,
        KeyCode::Esc => LineOutcome::Cancel,
        KeyCode::Char(c) => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
            LineOutcome::Consumed
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                buffer.drain(prev..*cursor);
                *cursor = prev;
            }
            LineOutcome::Consumed
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                buffer.drain(*cursor..next);
            }
            LineOutcome::Consumed
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                *cursor = prev;
            }
            LineOutcome::Consumed
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                *cursor = next;
            }
            LineOutcome::Consumed
        }
        KeyCode::Home => {
            *cursor = 0;
            LineOutcome::Consumed
        }
        KeyCode::End => {
            *cursor = buffer.len();
            LineOutcome::Consumed
        }
        _ => LineOutcome::Consumed,
    }
}
