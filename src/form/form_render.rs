use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use super::form_state::FormState;
use crate::event::FieldName;

/// Rows for one single-line input, borders included
const INPUT_HEIGHT: u16 = 3;

/// Render the form into `area`, highlighting the focused input
pub fn render_form(form: &mut FormState, focused: Option<FieldName>, frame: &mut Frame, area: Rect) {
    let constraints = FieldName::ALL.map(|field| {
        if field.is_multiline() {
            Constraint::Min(INPUT_HEIGHT)
        } else {
            Constraint::Length(INPUT_HEIGHT)
        }
    });
    let areas = Layout::vertical(constraints).split(area);

    for (field, field_area) in FieldName::ALL.into_iter().zip(areas.iter()) {
        let is_focused = focused == Some(field);
        let border_color = if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let input = form.input_mut(field);
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(Style::default().fg(border_color)),
        );
        input.set_cursor_style(if is_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&*input, *field_area);
    }
}
