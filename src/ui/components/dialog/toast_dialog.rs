//! Toast dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Toast;
use crate::submission::Severity;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Render the oldest pending toast centered on the screen
pub fn render_toast_dialog(frame: &mut Frame, toast: &Toast) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    let color = severity_color(toast.notification.severity);
    render_dialog(
        frame,
        DialogConfig {
            title: &toast.notification.title,
            title_color: color,
            border_color: color,
            message: &toast.notification.description,
            footer: Some(toast.received_at.format("%H:%M:%S").to_string()),
            hint: Some(hint),
            max_width: 60,
        },
    );
}
