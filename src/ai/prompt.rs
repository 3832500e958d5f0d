//! Prompt template generation
//!
//! Builds the single text prompt sent to the model from the event form, the
//! conversation so far and the new user message.

use crate::chat::ConversationTurn;
use crate::event::{EventFields, FieldName};

/// Completion cue the model continues from
const COMPLETION_CUE: &str = "AI:";

/// Instruction asking the model to append a JSON block of field edits
pub fn suggestion_instruction() -> String {
    format!(
        "After your reply, if any event details should change, append a JSON object \
         in a ```json code block using exactly these keys: {}. \
         Use null for, or omit, any field that should stay unchanged.",
        FieldName::key_list()
    )
}

/// Compose the full prompt for one chat turn
///
/// Layout:
/// ```text
/// Event Title: ...
/// Date: ...
/// Location: street, city, state zip, country
/// Description: ...
///
/// User: <oldest turn>
/// AI: <reply>
/// User: <message>
/// [suggestion instruction]
/// AI:
/// ```
pub fn compose(
    fields: &EventFields,
    history: &[ConversationTurn],
    message: &str,
    request_suggestions: bool,
) -> String {
    let mut prompt = render_fields(fields);
    prompt.push('\n');

    for turn in history {
        prompt.push_str(&format!("{} {}\n", turn.role.prompt_prefix(), turn.content));
    }

    prompt.push_str(&format!("User: {}\n", message));

    if request_suggestions {
        prompt.push_str(&suggestion_instruction());
        prompt.push('\n');
    }

    prompt.push_str(COMPLETION_CUE);
    prompt
}

/// Render the event context block, one attribute per line
fn render_fields(fields: &EventFields) -> String {
    format!(
        "Event Title: {}\nDate: {}\nLocation: {}\nDescription: {}\n",
        fields.title,
        fields.date_time,
        fields.address(),
        fields.description
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
