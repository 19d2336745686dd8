//! The two booking form screens

use super::field_renderer::{draw_checkbox, draw_choice, draw_field, draw_help_text, FieldView};
use crate::app::App;
use crate::state::{Field, RequestType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Company => "Example Corp.",
        Field::Name => "Taro Yamada",
        Field::Email => "you@example.com",
        Field::Message => "Current challenges, preferred dates…",
        Field::RequestType | Field::Consent => "",
    }
}

/// Field label, with a marker on required fields
fn label(field: Field) -> String {
    if field.is_validated() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn field_height(field: Field) -> u16 {
    match field {
        Field::Message => 6,
        Field::RequestType => 2 + RequestType::ALL.len() as u16,
        _ => 3,
    }
}

/// Draw the active step's fields
pub fn draw_step_form(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.form.store();
    let step = store.active_step();
    let focused = store.focused_field();

    let mut constraints: Vec<Constraint> = step
        .visible_fields
        .iter()
        .map(|f| Constraint::Length(field_height(*f)))
        .collect();
    constraints.push(Constraint::Min(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(area);

    for (idx, field) in step.visible_fields.iter().copied().enumerate() {
        let is_active = field == focused;
        let error = Some(store.errors.message(field)).filter(|m| !m.is_empty());
        let label = label(field);
        match field {
            Field::RequestType => {
                let options: Vec<(&str, &str)> = RequestType::ALL
                    .iter()
                    .map(|rt| (rt.title(), rt.badge()))
                    .collect();
                let selected = RequestType::ALL
                    .iter()
                    .position(|rt| *rt == store.data.request_type)
                    .unwrap_or(0);
                draw_choice(
                    frame,
                    chunks[idx],
                    &label,
                    &options,
                    selected,
                    is_active,
                );
            }
            Field::Consent => draw_checkbox(
                frame,
                chunks[idx],
                &label,
                store.data.consent,
                is_active,
                error,
            ),
            text => draw_field(
                frame,
                chunks[idx],
                FieldView {
                    label: &label,
                    value: store.data.text(text),
                    placeholder: if is_active { "" } else { placeholder(text) },
                    is_active,
                    is_multiline: text.is_multiline(),
                    error,
                },
            ),
        }
    }

    let help = if store.is_last_step() {
        format!(
            "{}  ·  Press Enter to {}",
            store.data.request_type.description(),
            store.data.request_type.submit_label().to_lowercase()
        )
    } else {
        store.data.request_type.description().to_string()
    };
    if let Some(help_area) = chunks.last() {
        draw_help_text(frame, *help_area, &help);
    }
}
