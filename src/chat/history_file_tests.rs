//! Tests for history file normalization

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_pairs() {
    let history = parse_history(r#"[["Hi", "Hello!"], ["Where?", "Boston."]]"#).unwrap();

    assert_eq!(
        history,
        vec![
            ConversationTurn::user("Hi"),
            ConversationTurn::assistant("Hello!"),
            ConversationTurn::user("Where?"),
            ConversationTurn::assistant("Boston."),
        ]
    );
}

#[test]
fn test_parse_messages() {
    let history = parse_history(
        r#"[{"role": "user", "content": "Hi"}, {"role": "assistant", "content": "Hello!"}]"#,
    )
    .unwrap();

    assert_eq!(
        history,
        vec![
            ConversationTurn::user("Hi"),
            ConversationTurn::assistant("Hello!")
        ]
    );
}

#[test]
fn test_pair_with_null_reply_yields_user_turn_only() {
    let history = parse_history(r#"[["Still waiting", null]]"#).unwrap();
    assert_eq!(history, vec![ConversationTurn::user("Still waiting")]);
}

#[test]
fn test_mixed_shapes() {
    let history =
        parse_history(r#"[["a", "b"], {"role": "user", "content": "c"}]"#).unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2], ConversationTurn::user("c"));
}

#[test]
fn test_empty_array() {
    assert!(parse_history("[]").unwrap().is_empty());
}

#[test]
fn test_unknown_role_is_rejected() {
    let result = parse_history(r#"[{"role": "system", "content": "x"}]"#);
    assert!(matches!(result, Err(PlannerError::InvalidHistory(_))));
}

#[test]
fn test_not_an_array_is_rejected() {
    let result = parse_history(r#"{"role": "user", "content": "x"}"#);
    assert!(matches!(result, Err(PlannerError::InvalidHistory(_))));
}

#[test]
fn test_load_history_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[["Plan a picnic", "Sure!"]]"#).unwrap();

    let history = load_history(file.path()).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].role, Role::Assistant);
}

#[test]
fn test_load_history_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_history(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(PlannerError::Io(_))));
}
