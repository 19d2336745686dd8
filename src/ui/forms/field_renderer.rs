//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What to draw for one text field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Inline error shown on the bottom border
    pub error: Option<String>,
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block<'a>(label: &'a str, is_active: bool, error: Option<String>) -> Block<'a> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a text field with a cursor when focused
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(field.placeholder, Style::default().fg(Color::DarkGray)),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(field.value, style), cursor]))
    };

    let block = field_block(field.label, field.is_active, field.error);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a list of choices with the selected one marked
pub fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[(&str, &str)],
    selected: usize,
    is_active: bool,
) {
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, (title, description))| {
            let is_selected = idx == selected;
            let marker = if is_selected { "(•) " } else { "( ) " };
            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(*title, title_style),
                Span::styled(format!("  {description}"), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let block = field_block(label, is_active, None);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Draw a checkbox line
pub fn draw_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    error: Option<String>,
) {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(mark, style.add_modifier(Modifier::BOLD)),
        Span::styled(label, style),
    ]));
    let block = field_block("Consent", is_active, error);
    frame.render_widget(content.block(block), area);
}

/// Draw help text below a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
