//! Reusable UI components

mod dialog;

pub use dialog::render_toast_dialog;
