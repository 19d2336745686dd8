//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Field, TOTAL_STEPS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of the step header
const HEADER_HEIGHT: u16 = 2;

/// Split the screen into header and main content, reserving the bottom line
/// for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Step header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the step indicator and helper line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.form.store();
    let step = store.active_step();
    let request_type = store.data.request_type;

    let spans = vec![
        Span::styled(
            format!(" Step {} / {} ", step.id, TOTAL_STEPS),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(step.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            format!("{}%", store.step_progress_percent()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", request_type.badge()),
            Style::default().fg(Color::Yellow),
        ),
    ];

    let header = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(step.helper, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Endpoint status
    let conn_status = if app.form.has_endpoint() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Yellow))
    };
    spans.push(conn_status);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current screen
fn get_hints(app: &App) -> String {
    match app.state.toasts.len() {
        0 => {}
        1 => return "Enter/Esc:dismiss".to_string(),
        n => return format!("Enter/Esc:dismiss ({n} messages)"),
    }
    if app.form.is_submitting() {
        return "Sending…".to_string();
    }

    let store = app.form.store();
    let toggle = match store.focused_field() {
        Field::Consent => "  Space:toggle",
        Field::RequestType => "  Space/←→:change",
        _ => "",
    };
    if store.is_last_step() {
        format!("Tab:next{toggle}  Enter/{SUBMIT_SHORTCUT}:submit  Esc:back")
    } else {
        format!("Tab:next{toggle}  Enter:continue")
    }
}
