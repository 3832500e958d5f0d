use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::event::{EventFields, FieldName};

/// Text inputs for the eight event fields, in form order
pub struct FormState {
    inputs: Vec<TextArea<'static>>,
}

impl FormState {
    pub fn new(fields: &EventFields) -> Self {
        Self {
            inputs: FieldName::ALL
                .iter()
                .map(|field| new_input(fields.get(*field)))
                .collect(),
        }
    }

    /// Current values of every input
    pub fn fields(&self) -> EventFields {
        let mut fields = EventFields::default();
        for field in FieldName::ALL {
            fields.set(field, self.value(field));
        }
        fields
    }

    /// Replace every input's text; unchanged inputs keep their cursor
    pub fn set_fields(&mut self, fields: &EventFields) {
        for field in FieldName::ALL {
            let value = fields.get(field);
            if self.value(field) != value {
                self.inputs[field.index()] = new_input(value);
            }
        }
    }

    pub fn value(&self, field: FieldName) -> String {
        self.input(field).lines().join("\n")
    }

    pub fn input(&self, field: FieldName) -> &TextArea<'static> {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: FieldName) -> &mut TextArea<'static> {
        &mut self.inputs[field.index()]
    }

    /// Forward a key to the input for `field`
    ///
    /// Returns true if the text changed.
    pub fn handle_key(&mut self, field: FieldName, key: KeyEvent) -> bool {
        self.input_mut(field).input(key)
    }
}

fn new_input(value: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(value.split('\n').map(str::to_string).collect());
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
