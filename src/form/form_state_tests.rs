use super::*;
use crate::test_utils::test_helpers::key;
use ratatui::crossterm::event::KeyCode;

fn sample_fields() -> EventFields {
    EventFields {
        title: "Game Night".to_string(),
        city: "Austin".to_string(),
        description: "Board games\nBring snacks".to_string(),
        ..EventFields::default()
    }
}

#[test]
fn test_round_trips_fields() {
    let form = FormState::new(&sample_fields());
    assert_eq!(form.fields(), sample_fields());
}

#[test]
fn test_multiline_value_keeps_lines() {
    let form = FormState::new(&sample_fields());
    assert_eq!(form.input(FieldName::Description).lines().len(), 2);
    assert_eq!(form.value(FieldName::Description), "Board games\nBring snacks");
}

#[test]
fn test_typing_appends_at_end() {
    let mut form = FormState::new(&sample_fields());

    assert!(form.handle_key(FieldName::City, key(KeyCode::Char('!'))));

    assert_eq!(form.value(FieldName::City), "Austin!");
}

#[test]
fn test_backspace_edits_value() {
    let mut form = FormState::new(&sample_fields());
    form.handle_key(FieldName::Title, key(KeyCode::Backspace));
    assert_eq!(form.fields().title, "Game Nigh");
}

#[test]
fn test_set_fields_replaces_changed_values_only() {
    let mut form = FormState::new(&sample_fields());
    form.input_mut(FieldName::Title).move_cursor(CursorMove::Head);

    let mut updated = sample_fields();
    updated.city = "Dallas".to_string();
    form.set_fields(&updated);

    assert_eq!(form.fields(), updated);
    // untouched input keeps its cursor
    assert_eq!(form.input(FieldName::Title).cursor(), (0, 0));
    assert_eq!(form.input(FieldName::City).cursor(), (0, 6));
}

#[test]
fn test_empty_fields() {
    let form = FormState::new(&EventFields::default());
    assert_eq!(form.fields(), EventFields::default());
}
