use std::sync::mpsc;

use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::ai::worker::spawn_worker;
use crate::ai::{AiError, AiState, ModelClient, SuggestionMap};
use crate::chat::History;
use crate::config::{ClipboardBackend, Config};
use crate::event::{EventFields, FieldName};
use crate::form::FormState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;

/// Which input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Message,
    Transcript,
}

impl Focus {
    /// Focus cycle: form fields in order, then the message input, then the transcript
    const ORDER: [Focus; 10] = [
        Focus::Field(FieldName::Title),
        Focus::Field(FieldName::DateTime),
        Focus::Field(FieldName::Street),
        Focus::Field(FieldName::City),
        Focus::Field(FieldName::State),
        Focus::Field(FieldName::ZipCode),
        Focus::Field(FieldName::Country),
        Focus::Field(FieldName::Description),
        Focus::Message,
        Focus::Transcript,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The form field, if a form input has focus
    pub fn field(self) -> Option<FieldName> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Message | Focus::Transcript => None,
        }
    }
}

/// Application state
pub struct App {
    pub form: FormState,
    pub message: TextArea<'static>,
    pub history: History,
    /// Suggestions waiting for accept or reject
    pub pending: Option<SuggestionMap>,
    /// Message sent to the model whose reply has not arrived yet
    pub awaiting: Option<String>,
    /// Display text of the latest reply, for copying
    pub last_reply: Option<String>,
    pub ai: AiState,
    pub focus: Focus,
    pub notification: NotificationState,
    pub transcript_scroll: ScrollState,
    pub clipboard_backend: ClipboardBackend,
    pub request_suggestions: bool,
    pub should_quit: bool,
}

impl App {
    /// Create an app with no model worker attached
    pub fn new(config: &Config, fields: &EventFields, history: History) -> Self {
        Self {
            form: FormState::new(fields),
            message: new_message_input(),
            history,
            pending: None,
            awaiting: None,
            last_reply: None,
            ai: AiState::new("AI unavailable"),
            focus: Focus::Message,
            notification: NotificationState::new(),
            transcript_scroll: ScrollState::new(),
            clipboard_backend: config.clipboard.backend,
            request_suggestions: config.ai.request_suggestions,
            should_quit: false,
        }
    }

    /// Create an app and start the model worker for `client`
    ///
    /// A client that failed to build still gets a worker; every message then
    /// fails with the setup error.
    pub fn with_client(
        config: &Config,
        fields: &EventFields,
        history: History,
        client: Result<Box<dyn ModelClient>, AiError>,
    ) -> Self {
        let mut app = Self::new(config, fields, history);

        if let Ok(client) = &client {
            app.ai.provider_label = format!("{} · {}", client.name(), client.model());
        }

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(client, request_rx, response_tx);
        app.ai.set_channels(request_tx, response_rx);

        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current event fields, as shown in the form
    pub fn fields(&self) -> EventFields {
        self.form.fields()
    }

    /// Text in the message input
    pub fn message_text(&self) -> String {
        self.message.lines().join("\n")
    }

    /// Replace the message input's text
    pub fn set_message_text(&mut self, text: &str) {
        let mut message = new_message_input();
        message.insert_str(text);
        self.message = message;
    }
}

fn new_message_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Ask for ideas, e.g. what food should I serve?");
    textarea
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
