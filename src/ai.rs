//! AI assistant module
//!
//! Prompt composition, the model client abstraction, suggestion handling and
//! the background worker that runs model calls.

pub mod ai_render;
pub mod ai_state;
pub mod prompt;
pub mod provider;
pub mod render;
pub mod suggestion;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, AiState};
pub use prompt::compose;
pub use provider::{AiError, AiProvider, ModelClient};
pub use suggestion::{ExtractedReply, SuggestionMap, extract, merge};
