//! Chat turn operations
//!
//! Ties prompt composition, the model call, suggestion extraction and merging
//! together. The caller owns the fields, the history and the pending
//! suggestion map; every operation returns new values instead of keeping state.

use crate::ai::{ExtractedReply, SuggestionMap, compose, extract, merge};
use crate::ai::{AiError, ModelClient};
use crate::chat::{ConversationTurn, History};
use crate::event::EventFields;

/// Result of one chat turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// Reply text with any suggestion block removed
    pub display_text: String,
    /// History with the user message and the reply appended
    pub history: History,
    /// Suggestions parsed from the reply; empty when there were none
    pub suggestions: SuggestionMap,
}

impl TurnOutcome {
    /// The suggestion map to store as pending, if it holds anything
    pub fn pending_suggestions(&self) -> Option<SuggestionMap> {
        (!self.suggestions.is_empty()).then(|| self.suggestions.clone())
    }
}

/// Run a full chat turn against `client`
///
/// Model failures are returned as-is; the history passed in is untouched.
pub fn chat_turn(
    client: &dyn ModelClient,
    fields: &EventFields,
    history: &[ConversationTurn],
    message: &str,
    request_suggestions: bool,
) -> Result<TurnOutcome, AiError> {
    let prompt = compose(fields, history, message, request_suggestions);
    let raw_reply = client.invoke(&prompt)?;
    Ok(finish_turn(history, message, &raw_reply))
}

/// Turn a raw model reply into a chat outcome
///
/// Used directly when the model call happened elsewhere (the UI worker).
pub fn finish_turn(history: &[ConversationTurn], message: &str, raw_reply: &str) -> TurnOutcome {
    let ExtractedReply {
        display_text,
        suggestions,
    } = extract(raw_reply);

    let mut history = history.to_vec();
    history.push(ConversationTurn::user(message));
    history.push(ConversationTurn::assistant(display_text.clone()));

    TurnOutcome {
        display_text,
        history,
        suggestions,
    }
}

/// Apply the pending suggestions and clear them
pub fn accept(current: &EventFields, pending: &mut Option<SuggestionMap>) -> EventFields {
    match pending.take() {
        Some(suggestions) => merge(current, &suggestions),
        None => current.clone(),
    }
}

/// Discard the pending suggestions; fields are returned unchanged
pub fn reject(current: &EventFields, pending: &mut Option<SuggestionMap>) -> EventFields {
    if pending.take().is_some() {
        log::debug!("Suggestions rejected");
    }
    merge(current, &SuggestionMap::new())
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod planner_tests;
