//! Suggestion extraction for AI responses
//!
//! Splits a raw model reply into the text shown to the user and the JSON
//! suggestion object the model was asked to append. Model output is untrusted:
//! every path degrades to an empty suggestion map instead of failing.
//!
//! Attempts, first match wins:
//! 1. a fenced block opened with `` ```json `` (or a longer backtick run)
//!    whose body starts with `{`
//! 2. the span from the first `{` to the last `}`
//! 3. nothing: the reply is shown unchanged

use std::ops::Range;

use serde_json::Value;

use super::map::SuggestionMap;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// A model reply split into display text and suggestions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedReply {
    pub display_text: String,
    pub suggestions: SuggestionMap,
}

/// Byte offsets of a fenced JSON block
struct FencedBlock {
    /// Whole block, fences included
    outer: Range<usize>,
    /// Text between the tag and the closing fence
    body: Range<usize>,
}

/// Split a raw reply into display text and a suggestion map
pub fn extract(raw_reply: &str) -> ExtractedReply {
    if let Some(block) = find_json_fence(raw_reply) {
        let mut display = String::with_capacity(raw_reply.len());
        display.push_str(&raw_reply[..block.outer.start]);
        display.push_str(&raw_reply[block.outer.end..]);

        return ExtractedReply {
            display_text: display.trim().to_string(),
            suggestions: parse_candidate(&raw_reply[block.body]),
        };
    }

    if let Some(span) = find_brace_span(raw_reply) {
        return ExtractedReply {
            display_text: raw_reply[..span.start].trim().to_string(),
            suggestions: parse_candidate(&raw_reply[span]),
        };
    }

    ExtractedReply {
        display_text: raw_reply.to_string(),
        suggestions: SuggestionMap::new(),
    }
}

/// Find the first `` ```json `` block that is closed and holds an object
///
/// The opening fence may be any run of three or more backticks; the block is
/// closed by the next run at least as long. The tag is matched
/// case-insensitively. Blocks whose body does not start with `{` are skipped
/// so that fenced lists or prose never count as suggestions.
fn find_json_fence(text: &str) -> Option<FencedBlock> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find(FENCE) {
        let start = search_from + offset;
        let run = backtick_run(&text[start..]);
        let tag_start = start + run;
        let tag_end = tag_start + JSON_TAG.len();

        let is_json_tag = text
            .get(tag_start..tag_end)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(JSON_TAG));

        if !is_json_tag {
            search_from = tag_start;
            continue;
        }

        let closing = &text[start..tag_start];
        let close = text[tag_end..].find(closing)? + tag_end;
        let close_end = close + backtick_run(&text[close..]);

        if text[tag_end..close].trim_start().starts_with('{') {
            return Some(FencedBlock {
                outer: start..close_end,
                body: tag_end..close,
            });
        }

        search_from = close_end;
    }

    None
}

/// Length in bytes of the backtick run at the start of `text`
fn backtick_run(text: &str) -> usize {
    text.bytes().take_while(|&b| b == b'`').count()
}

/// Greedy outer brace span: first `{` through last `}`
fn find_brace_span(text: &str) -> Option<Range<usize>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end > start {
        Some(start..end + 1)
    } else {
        None
    }
}

/// Parse candidate text as a JSON object, or give up with an empty map
fn parse_candidate(candidate: &str) -> SuggestionMap {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => SuggestionMap::from(map),
        Ok(other) => {
            log::debug!("Suggestion block is not an object: {}", other);
            SuggestionMap::new()
        }
        Err(e) => {
            log::debug!("Failed to parse suggestion block: {}", e);
            SuggestionMap::new()
        }
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
