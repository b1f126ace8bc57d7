//! Brivity contact form
//!
//! Client-side validation and `mailto:` hand-off for the Brivity contact
//! form, with a Ratatui front end.

pub mod app;
pub mod config;
pub mod contact;
pub mod handoff;
pub mod platform;
pub mod state;
pub mod ui;
