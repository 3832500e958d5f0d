//! AI Assistant state management
//!
//! Tracks the in-flight model request and the channel handles used to talk
//! to the worker thread.

use std::sync::mpsc::{Receiver, Sender};

mod lifecycle;
mod response;

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    /// Send a composed prompt to the model
    Query {
        prompt: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiResponse {
    /// The full model reply
    Complete { text: String, request_id: u64 },
    /// The model call failed
    Error { message: String, request_id: u64 },
}

impl AiResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AiResponse::Complete { request_id, .. } | AiResponse::Error { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// AI Assistant state
pub struct AiState {
    /// Whether we're waiting for a reply
    pub loading: bool,
    /// Last error message (if any)
    pub error: Option<String>,
    /// Provider and model, e.g. "Ollama · llama3.2"
    pub provider_label: String,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<AiRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<AiResponse>>,
    /// Current request ID, incremented for each new request
    pub request_id: u64,
    /// ID of the request whose reply we still want, if any
    pub in_flight_request_id: Option<u64>,
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
