//! Layout components (form, status panel, status bar)

use crate::app::App;
use crate::platform::{COPY_LINK_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FieldKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the status panel (borders + summary + link)
const STATUS_PANEL_HEIGHT: u16 = 4;

/// Split the screen into form, status panel and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                      // Form
            Constraint::Length(STATUS_PANEL_HEIGHT), // Status panel
            Constraint::Length(1),                   // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Keyboard hints for the focused field
fn field_hints(app: &App) -> String {
    let form = &app.state.form;
    let local = match form.active_field_id().map(|id| form.field(id)) {
        Some(field) => match field.kind() {
            FieldKind::Text if field.is_multiline => "Enter:newline",
            FieldKind::Text => "type to edit",
            FieldKind::Choice => "←/→:choose  Del:clear",
            FieldKind::Checklist => "j/k:move  Space:toggle",
        },
        None => "Enter:send",
    };
    format!("Tab:next  {local}  {SUBMIT_SHORTCUT}:send  {COPY_LINK_SHORTCUT}:copy link")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        field_hints(app),
        Style::default().fg(Color::White),
    )];

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Quit hint on the right
    let quit_hint = " Esc:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
