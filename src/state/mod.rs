//! Application state module

mod app_state;
mod field_errors;
mod forms;

pub use app_state::*;
pub use field_errors::*;
pub use forms::*;
