//! Form rendering module
//!
//! - `field_renderer`: text field, choice and checkbox widgets
//! - `step_form`: the booking form screens

mod field_renderer;
mod step_form;

pub use step_form::draw_step_form;
