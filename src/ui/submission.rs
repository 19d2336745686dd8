//! Progress gauge and success banner

use crate::app::App;
use crate::state::RequestType;
use crate::submission::SuccessBanner;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Height of the success banner
pub const BANNER_HEIGHT: u16 = 5;

/// Draw the in-flight submission screen
pub fn draw_pending(frame: &mut Frame, area: Rect, app: &App, request_type: RequestType) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Gauge
            Constraint::Min(0),    // Description
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        request_type.pending_title(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    let gauge = &app.state.gauge;
    let widget = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(gauge.ratio())
        .label(format!("{}%", gauge.percent()));
    frame.render_widget(widget, chunks[1]);

    let description = Paragraph::new(request_type.pending_description())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[2]);
}

/// Draw the success banner above the fresh form
pub fn draw_banner(frame: &mut Frame, area: Rect, banner: &SuccessBanner) {
    let content = vec![
        Line::from(vec![
            Span::styled(
                "✓ Submission complete",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", banner.shown_at.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(banner.description()),
    ];
    let widget = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(widget, area);
}
