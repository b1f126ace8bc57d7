//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod status_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (form_area, status_area, bar_area) = layout::create_layout(area);

    forms::draw_contact_form(frame, form_area, app);
    status_panel::draw(frame, status_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, bar_area, app);
}
