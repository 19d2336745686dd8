//! Dialog components for TUI

mod base;
mod toast_dialog;

pub use toast_dialog::render_toast_dialog;
