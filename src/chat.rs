//! Chat module
//!
//! Conversation turns, loading saved transcripts from disk and the transcript
//! pane.

mod history_file;
pub mod transcript_render;
mod turn;

pub use history_file::{load_history, parse_history};
pub use turn::{ConversationTurn, History, Role};
