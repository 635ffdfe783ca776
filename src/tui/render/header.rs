use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::all_complete;
use crate::tui::app::{App, Mode};

/// Render the header: input row plus a separator line.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // Toggle-all chevron: bright once everything is done
    let chevron_style = if all_complete(&app.items) {
        Style::default().fg(app.theme.green).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" \u{2228} ", chevron_style)];

    if app.mode == Mode::Insert {
        spans.push(Span::styled(
            "\u{276F} ",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        super::push_editor_spans(
            &mut spans,
            &app.edit_buffer,
            app.edit_cursor,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.text_bright),
        );
    } else {
        spans.push(Span::styled(
            "What needs to be done?",
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let input_row = Line::from(spans);
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![input_row, separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
