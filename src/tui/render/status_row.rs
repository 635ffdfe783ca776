use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::{Filter, active_count};
use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ))
            } else {
                navigate_line(app, width)
            }
        }
        Mode::Insert => hint_line(app, width, "Enter add  Esc done"),
        Mode::Edit => hint_line(app, width, "Enter save  Esc cancel"),
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            pad_with_hint(app, &mut spans, width, "Enter search  Esc cancel");
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Count, filter tabs, and an optional search indicator.
fn navigate_line(app: &App, width: usize) -> Line<'_> {
    let bg = app.theme.background;
    let n = active_count(&app.items);
    let mut spans = vec![Span::styled(
        format!(" {} item{} left  ", n, if n == 1 { "" } else { "s" }),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    for (i, filter) in [Filter::All, Filter::Active, Filter::Completed]
        .into_iter()
        .enumerate()
    {
        let style = if filter == app.filter {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(
            format!("{} {} ", i + 1, capitalized(filter)),
            style,
        ));
    }

    if let Some(ref pattern) = app.last_search {
        spans.push(Span::styled(
            format!(" /{}", pattern),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    pad_with_hint(app, &mut spans, width, "? help");
    Line::from(spans)
}

fn hint_line<'a>(app: &App, width: usize, hint: &'a str) -> Line<'a> {
    let mut spans = Vec::new();
    pad_with_hint(app, &mut spans, width, hint);
    Line::from(spans)
}

/// Right-align a dim hint after whatever is already in `spans`.
fn pad_with_hint<'a>(app: &App, spans: &mut Vec<Span<'a>>, width: usize, hint: &'a str) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}

fn capitalized(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "All",
        Filter::Active => "Active",
        Filter::Completed => "Completed",
    }
}
