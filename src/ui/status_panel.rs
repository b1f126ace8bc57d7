//! Outcome status panel

use crate::app::App;
use crate::contact::{Announcement, StatusMessage};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn status_lines(message: &StatusMessage) -> Vec<Line<'static>> {
    let text_style = match message.announcement {
        Announcement::Alert => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Announcement::Status => Style::default().fg(Color::Green),
    };

    let mut lines = vec![Line::from(Span::styled(message.text.clone(), text_style))];
    if let Some(link) = &message.link {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", link.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                link.href.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines
}

/// Draw the status region. Empty until the first submission attempt.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let lines = app
        .state
        .status
        .current()
        .map(status_lines)
        .unwrap_or_default();

    let border_color = match app.state.status.current().map(|m| m.announcement) {
        Some(Announcement::Alert) => Color::Red,
        Some(Announcement::Status) => Color::Green,
        None => Color::DarkGray,
    };

    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
