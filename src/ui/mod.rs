//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submission;

use crate::app::App;
use crate::submission::SubmissionState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.form.status() {
        SubmissionState::InProgress { request_type, .. } => {
            submission::draw_pending(frame, main_area, app, *request_type)
        }
        SubmissionState::Success(banner) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(submission::BANNER_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(main_area);
            submission::draw_banner(frame, chunks[0], banner);
            forms::draw_step_form(frame, chunks[1], app);
        }
        SubmissionState::Idle => forms::draw_step_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Oldest toast on top of everything
    if let Some(toast) = app.state.toasts.front() {
        components::render_toast_dialog(frame, &toast);
    }
}
