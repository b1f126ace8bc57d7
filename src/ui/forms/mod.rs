//! Form rendering module
//!
//! - `field_renderer`: text, select and checklist field widgets
//! - `contact_form`: the contact form screen

mod contact_form;
mod field_renderer;

pub use contact_form::draw_contact_form;
