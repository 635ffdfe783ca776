pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use crate::util::unicode;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (input row + separator) | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    list_view::render_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Push spans for a line editor: text with a block cursor at `cursor`
/// (a byte offset on a grapheme boundary).
pub(super) fn push_editor_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    buffer: &str,
    cursor: usize,
    base_style: Style,
    cursor_style: Style,
) {
    let cursor = cursor.min(buffer.len());
    if cursor > 0 {
        spans.push(Span::styled(buffer[..cursor].to_string(), base_style));
    }
    match unicode::next_grapheme_boundary(buffer, cursor) {
        Some(end) => {
            // Cursor sits on a grapheme: render it reversed
            spans.push(Span::styled(buffer[cursor..end].to_string(), cursor_style));
            if end < buffer.len() {
                spans.push(Span::styled(buffer[end..].to_string(), base_style));
            }
        }
        None => {
            // Cursor past the end: draw a bar
            spans.push(Span::styled("\u{258C}".to_string(), cursor_style));
        }
    }
}
