//! Tests for chat turn operations

use super::*;
use crate::chat::Role;
use crate::test_utils::test_helpers::FakeClient;
use proptest::prelude::*;
use serde_json::json;

fn fields() -> EventFields {
    EventFields {
        title: "Game Night".to_string(),
        date_time: "Saturday 6pm".to_string(),
        city: "Austin".to_string(),
        ..EventFields::default()
    }
}

#[test]
fn test_chat_turn_appends_user_and_display_text() {
    let client = FakeClient::replying("Sure!\n```json\n{\"city\": \"Dallas\"}\n```");
    let history = vec![
        ConversationTurn::user("Hi"),
        ConversationTurn::assistant("Hello"),
    ];

    let outcome = chat_turn(&client, &fields(), &history, "Move it to Dallas", true).unwrap();

    assert_eq!(outcome.display_text, "Sure!");
    assert_eq!(outcome.history.len(), 4);
    assert_eq!(outcome.history[2], ConversationTurn::user("Move it to Dallas"));
    assert_eq!(outcome.history[3], ConversationTurn::assistant("Sure!"));
    assert_eq!(outcome.suggestions.get("city"), Some(&json!("Dallas")));
    assert_eq!(history.len(), 2, "input history must not be mutated");
}

#[test]
fn test_chat_turn_sends_composed_prompt() {
    let client = FakeClient::replying("ok");
    let prompts = client.prompts();

    chat_turn(&client, &fields(), &[], "What snacks?", true).unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(
        prompts[0],
        compose(&fields(), &[], "What snacks?", true)
    );
}

#[test]
fn test_chat_turn_propagates_model_error() {
    let client = FakeClient::failing("model exploded");
    let result = chat_turn(&client, &fields(), &[], "hi", false);

    match result {
        Err(AiError::Network { message, .. }) => assert_eq!(message, "model exploded"),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[test]
fn test_finish_turn_without_suggestions() {
    let outcome = finish_turn(&[], "Any ideas?", "Try charades.");

    assert_eq!(outcome.display_text, "Try charades.");
    assert!(outcome.suggestions.is_empty());
    assert!(outcome.pending_suggestions().is_none());
    assert_eq!(outcome.history[1].role, Role::Assistant);
}

#[test]
fn test_pending_suggestions_when_present() {
    let outcome = finish_turn(&[], "Rename it", "Done {\"title\": \"Board Game Bash\"}");
    let pending = outcome.pending_suggestions().unwrap();
    assert_eq!(pending.get("title"), Some(&json!("Board Game Bash")));
}

#[test]
fn test_accept_merges_and_clears() {
    let outcome = finish_turn(&[], "Rename it", "Done {\"title\": \"Board Game Bash\"}");
    let mut pending = outcome.pending_suggestions();

    let updated = accept(&fields(), &mut pending);

    assert_eq!(updated.title, "Board Game Bash");
    assert_eq!(updated.city, "Austin");
    assert!(pending.is_none());
}

#[test]
fn test_reject_keeps_fields_and_clears() {
    let outcome = finish_turn(&[], "Rename it", "Done {\"title\": \"Board Game Bash\"}");
    let mut pending = outcome.pending_suggestions();

    let updated = reject(&fields(), &mut pending);

    assert_eq!(updated, fields());
    assert!(pending.is_none());
}

#[test]
fn test_accept_without_pending_is_identity() {
    let mut pending = None;
    assert_eq!(accept(&fields(), &mut pending), fields());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Whatever the model returns, a full turn followed by accept is well defined
    #[test]
    fn prop_round_trip_with_any_reply(reply in any::<String>()) {
        let client = FakeClient::replying(&reply);
        let outcome = chat_turn(&client, &fields(), &[], "msg", true).unwrap();
        let mut pending = outcome.pending_suggestions();

        let _ = accept(&fields(), &mut pending);

        prop_assert!(pending.is_none());
        prop_assert_eq!(outcome.history.len(), 2);
    }
}

#[test]
fn test_round_trip_with_empty_reply() {
    let client = FakeClient::replying("");
    let outcome = chat_turn(&client, &fields(), &[], "msg", true).unwrap();

    assert_eq!(outcome.display_text, "");
    assert_eq!(merge(&fields(), &outcome.suggestions), fields());
}
