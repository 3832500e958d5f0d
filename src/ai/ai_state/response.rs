//! AI response handling
//!
//! Sends prompts to the worker and filters replies by request id.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::ai::ai_state::{AiRequest, AiResponse, AiState};

impl AiState {
    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Send a prompt to the worker
    ///
    /// Returns true if the request was sent successfully, false otherwise.
    pub fn send_request(&mut self, prompt: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.start_request();
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(AiRequest::Query { prompt, request_id }).is_ok()
        {
            return true;
        }

        self.set_error("AI worker is not running".to_string());
        false
    }

    /// Take the next reply for the in-flight request, if one has arrived
    ///
    /// Replies for any other request id are stale and dropped. State is
    /// updated (loading cleared, error recorded) before the reply is returned.
    pub fn poll_response(&mut self) -> Option<AiResponse> {
        loop {
            let received = match self.response_rx.as_ref()?.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    if self.loading {
                        self.set_error("AI worker stopped unexpectedly".to_string());
                    }
                    self.response_rx = None;
                    return None;
                }
            };

            if self.in_flight_request_id != Some(received.request_id()) {
                log::debug!("Dropping stale reply for request {}", received.request_id());
                continue;
            }

            match &received {
                AiResponse::Complete { .. } => self.complete_request(),
                AiResponse::Error { message, .. } => self.set_error(message.clone()),
            }
            return Some(received);
        }
    }

    /// Check if there's an in-flight request
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}
