//! AI state lifecycle management
//!
//! Handles initialization and request state transitions.

use crate::ai::ai_state::AiState;

impl AiState {
    /// Create a new AiState
    ///
    /// # Arguments
    /// * `provider_label` - Provider and model shown in the transcript title
    pub fn new(provider_label: impl Into<String>) -> Self {
        Self {
            loading: false,
            error: None,
            provider_label: provider_label.into(),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Start a new request
    ///
    /// Increments the request_id so replies to earlier requests are filtered
    /// out, and marks the new id as in flight.
    pub fn start_request(&mut self) {
        self.error = None;
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
    }

    /// Mark the request as complete
    pub fn complete_request(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Set an error state
    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Stop waiting for the in-flight reply; it is dropped when it arrives
    pub fn discard_in_flight(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take() {
            log::debug!("Discarding in-flight request {}", request_id);
        }
        self.loading = false;
        self.error = None;
    }
}
