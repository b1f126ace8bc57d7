//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Bordered block for a field. Invalid fields get a red border and their
/// error text along the bottom edge.
fn field_block(label: &str, is_active: bool, error: Option<&str>) -> Block<'static> {
    let border_color = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a text or single-select field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = match (&field.value, display_value.is_empty(), is_active) {
        (FieldValue::Choice { .. }, true, true) => "←/→ to choose".to_string(),
        (FieldValue::Choice { .. }, true, false) => "(none selected)".to_string(),
        (_, true, false) => "(empty)".to_string(),
        _ => display_value,
    };

    let cursor = match (&field.value, is_active) {
        (FieldValue::Text(_), true) => "▌",
        _ => "",
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if display_str.ends_with('\n') {
            lines.push(Line::default());
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a multi-select field as a checkbox list
pub fn draw_checklist(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let FieldValue::Checklist {
        options,
        checked,
        cursor,
    } = &field.value
    else {
        draw_field(frame, area, field, is_active, error);
        return;
    };

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mark = if checked.contains(&i) { "[x]" } else { "[ ]" };
            let under_cursor = is_active && i == *cursor;
            let style = if under_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if checked.contains(&i) {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let pointer = if under_cursor { "▶ " } else { "  " };
            Line::from(Span::styled(format!("{pointer}{mark} {option}"), style))
        })
        .collect();

    let block = field_block(&field.label, is_active, error);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
