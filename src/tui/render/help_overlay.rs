use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("a / i", "add an item"),
    ("e / Enter", "edit item under cursor"),
    ("x / Space", "toggle complete"),
    ("d", "delete item"),
    ("c", "clear completed"),
    ("A", "toggle all complete"),
    ("Tab, 1/2/3", "switch filter"),
    ("j / k", "move cursor"),
    ("g / G", "top / bottom"),
    ("/", "search"),
    ("n / N", "next / previous match"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the help overlay centered over the whole screen
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (BINDINGS.len() + 2) as u16;
    let width = 44u16.min(area.width);
    let popup = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, popup);

    let mut lines = Vec::new();
    for (keys, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<12}", keys),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(app.theme.background),
            ),
            Span::styled(
                action.to_string(),
                Style::default().fg(app.theme.text).bg(app.theme.background),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .style(
            Style::default()
                .fg(app.theme.dim)
                .bg(app.theme.background),
        );
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
