//! AI Worker Thread
//!
//! Runs the blocking model call in a background thread so the UI keeps
//! drawing while the model thinks. Receives prompts via channel and sends
//! each complete reply (or error) back to the main thread.

use std::sync::mpsc::{Receiver, Sender};

use super::ai_state::{AiRequest, AiResponse};
use super::provider::{AiError, ModelClient};

/// Spawn the AI worker thread
///
/// # Arguments
/// * `client` - The model client, or the error explaining why none exists
/// * `request_rx` - Channel to receive requests from the main thread
/// * `response_tx` - Channel to send responses to the main thread
pub fn spawn_worker(
    client: Result<Box<dyn ModelClient>, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: Result<Box<dyn ModelClient>, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let (client, setup_error) = match client {
        Ok(c) => (Some(c), None),
        Err(e) => {
            // Reported on the first request, not at startup
            log::debug!("AI provider not configured: {}", e);
            (None, Some(e.to_string()))
        }
    };

    while let Ok(request) = request_rx.recv() {
        match request {
            AiRequest::Query { prompt, request_id } => {
                let response = match &client {
                    Some(client) => handle_query(client.as_ref(), &prompt, request_id),
                    None => AiResponse::Error {
                        message: setup_error
                            .clone()
                            .unwrap_or_else(|| "AI not configured".to_string()),
                        request_id,
                    },
                };

                if response_tx.send(response).is_err() {
                    // Main thread is gone
                    break;
                }
            }
        }
    }

    log::debug!("AI worker thread shutting down");
}

/// Run one blocking model call
fn handle_query(client: &dyn ModelClient, prompt: &str, request_id: u64) -> AiResponse {
    log::debug!(
        "Request {} -> {} ({})",
        request_id,
        client.name(),
        client.model()
    );

    match client.invoke(prompt) {
        Ok(text) => AiResponse::Complete { text, request_id },
        Err(e) => {
            log::warn!("Request {} failed: {}", request_id, e);
            AiResponse::Error {
                message: e.to_string(),
                request_id,
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
