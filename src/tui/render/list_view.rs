use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::Filter;
use crate::tui::app::{App, Mode};

/// Render the item list for the active filter.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.loading {
        let loading = Paragraph::new(" Loading\u{2026}")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(loading, area);
        return;
    }

    let visible_len = app.visible().len();
    if visible_len == 0 {
        let message = if app.items.is_empty() {
            " Nothing to do \u{2014} press a to add an item"
        } else {
            match app.filter {
                Filter::Active => " No active items",
                Filter::Completed => " No completed items",
                Filter::All => " Nothing to do",
            }
        };
        let empty = Paragraph::new(message).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor on screen
    let height = area.height as usize;
    if height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + height {
            app.scroll_offset = app.cursor + 1 - height;
        }
        if app.scroll_offset + height > visible_len {
            app.scroll_offset = visible_len.saturating_sub(height);
        }
    }

    let search_re = app.active_search_re();
    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    let visible = app.visible();
    for (i, item) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans: Vec<Span> = Vec::new();

        // Key, dimmed, for cross-reference with the CLI
        spans.push(Span::styled(
            format!(" {:>3} ", item.key),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        // Checkbox
        let (mark, mark_color) = if item.complete {
            ("[x] ", app.theme.green)
        } else {
            ("[ ] ", app.theme.dim)
        };
        spans.push(Span::styled(
            mark,
            Style::default().fg(mark_color).bg(row_bg),
        ));

        if app.mode == Mode::Edit && item.editing {
            // In-place rewrite of this row
            super::push_editor_spans(
                &mut spans,
                &app.edit_buffer,
                app.edit_cursor,
                Style::default().fg(app.theme.text_bright).bg(row_bg),
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.text_bright),
            );
        } else {
            let text_style = if item.complete {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if is_cursor {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };
            let highlight_style = Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg);
            super::push_highlighted_spans(
                &mut spans,
                &item.text,
                text_style,
                highlight_style,
                search_re.as_ref(),
            );
        }

        // Pad the cursor row so the selection reads as a bar
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
