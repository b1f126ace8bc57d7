//! Contact form rendering

use super::field_renderer::{draw_checklist, draw_field};
use crate::app::App;
use crate::contact::{DisplayTarget, FieldId};
use crate::state::{FieldValue, SUBMIT_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one field widget, borders included
fn field_height(app: &App, id: FieldId) -> u16 {
    match (&app.state.form.field(id).value, id) {
        (FieldValue::Checklist { options, .. }, _) => options.len() as u16 + 2,
        (_, FieldId::Message) => 6,
        _ => 3,
    }
}

/// Draw the contact form: six fields and the Submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = app
        .registry()
        .iter()
        .map(|spec| Constraint::Length(field_height(app, spec.id)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Work with Brivity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;
    for spec in app.registry().iter() {
        let id = spec.id;
        let chunk = chunks[id.index()];
        let field = form.field(id);
        let is_active = form.active_field_index == id.index();
        let error = app.state.errors.message(id);

        match spec.display {
            DisplayTarget::Inline => draw_field(frame, chunk, field, is_active, error),
            DisplayTarget::Group => draw_checklist(frame, chunk, field, is_active, error),
        }
    }

    // Keep the button narrow like a real form control
    let button_area = Rect {
        width: chunks[SUBMIT_ROW].width.min(16),
        ..chunks[SUBMIT_ROW]
    };
    render_button(
        frame,
        button_area,
        "Send inquiry",
        form.is_submit_row_active(),
        Color::Green,
    );
}
