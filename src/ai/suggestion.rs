//! Suggestion module for AI assistant
//!
//! This module provides the suggestion map type, extraction of the JSON
//! suggestion block from model replies, and merging accepted suggestions
//! back into the event fields.

pub mod extract;
pub mod map;
pub mod merge;

// Re-export main types
pub use extract::{ExtractedReply, extract};
pub use map::{SuggestionEntry, SuggestionMap};
pub use merge::merge;
