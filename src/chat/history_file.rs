//! History file loading
//!
//! Saved transcripts come in two shapes: `[user, assistant]` pairs and
//! `{role, content}` messages. Both are normalized into `ConversationTurn`s
//! here so the rest of the crate only sees one representation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::turn::{ConversationTurn, History, Role};
use crate::error::PlannerError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTurn {
    Message { role: Role, content: String },
    Pair(String, Option<String>),
}

/// Read and normalize a history file
pub fn load_history(path: &Path) -> Result<History, PlannerError> {
    let contents = fs::read_to_string(path)?;
    parse_history(&contents)
}

/// Normalize a JSON transcript in either supported shape
///
/// A pair with a `null` assistant half yields only the user turn. Shapes may
/// be mixed within one array.
pub fn parse_history(json: &str) -> Result<History, PlannerError> {
    let raw: Vec<RawTurn> =
        serde_json::from_str(json).map_err(|e| PlannerError::InvalidHistory(e.to_string()))?;

    let mut history = Vec::with_capacity(raw.len());
    for turn in raw {
        match turn {
            RawTurn::Message { role, content } => {
                history.push(ConversationTurn { role, content });
            }
            RawTurn::Pair(user, assistant) => {
                history.push(ConversationTurn::user(user));
                if let Some(reply) = assistant {
                    history.push(ConversationTurn::assistant(reply));
                }
            }
        }
    }

    log::debug!("Loaded {} history turns", history.len());
    Ok(history)
}

#[cfg(test)]
#[path = "history_file_tests.rs"]
mod history_file_tests;
