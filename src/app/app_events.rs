use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::ai::{AiResponse, compose};
use crate::clipboard::handle_clipboard_key;
use crate::event::FieldName;
use crate::planner;

/// How long to wait for input before checking the worker again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait briefly for a terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Field(field) => {
                if key.code == KeyCode::Enter && !field.is_multiline() {
                    self.focus = self.focus.next();
                } else {
                    self.form.handle_key(field, key);
                }
            }
            Focus::Message => {
                if key.code == KeyCode::Enter {
                    self.submit_message();
                } else {
                    self.message.input(key);
                }
            }
            Focus::Transcript => self.handle_transcript_key(key),
        }
    }

    /// Keys that work regardless of focus
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('a') if ctrl => self.accept_suggestions(),
            KeyCode::Char('r') if ctrl => self.reject_suggestions(),
            KeyCode::Char('l') if ctrl => self.clear_conversation(),
            KeyCode::Char('s') if ctrl => self.toggle_suggestions(),
            KeyCode::Char('y') if ctrl => return handle_clipboard_key(self, key),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => return false,
        }
        true
    }

    fn handle_transcript_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.transcript_scroll.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.transcript_scroll.scroll_down(1),
            KeyCode::PageUp => self.transcript_scroll.page_up(),
            KeyCode::PageDown => self.transcript_scroll.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.transcript_scroll.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.transcript_scroll.jump_to_bottom(),
            _ => {}
        }
    }

    /// Send the message input to the model
    ///
    /// Returns true if a request was sent. Blank messages and messages typed
    /// while a reply is pending are not sent.
    pub fn submit_message(&mut self) -> bool {
        if self.ai.loading {
            self.notification.show_warning("Still waiting for the last reply");
            return false;
        }

        let message = self.message_text();
        if message.trim().is_empty() {
            return false;
        }

        let prompt = compose(
            &self.fields(),
            &self.history,
            &message,
            self.request_suggestions,
        );

        if !self.ai.send_request(prompt) {
            let error = self
                .ai
                .error
                .clone()
                .unwrap_or_else(|| "AI is not available".to_string());
            self.notification.show_error(&error);
            return false;
        }

        self.awaiting = Some(message);
        self.set_message_text("");
        self.transcript_scroll.jump_to_bottom();
        true
    }

    /// Pick up a finished model reply, if any
    pub fn poll_ai(&mut self) {
        match self.ai.poll_response() {
            Some(AiResponse::Complete { text, .. }) => self.finish_reply(&text),
            Some(AiResponse::Error { message, .. }) => self.fail_reply(&message),
            None => {
                // worker went away without answering
                if self.awaiting.is_some()
                    && !self.ai.loading
                    && let Some(error) = self.ai.error.clone()
                {
                    self.fail_reply(&error);
                }
            }
        }
    }

    fn finish_reply(&mut self, raw_reply: &str) {
        let Some(message) = self.awaiting.take() else {
            return;
        };

        let outcome = planner::finish_turn(&self.history, &message, raw_reply);
        self.pending = outcome.pending_suggestions();
        self.history = outcome.history;
        self.last_reply = Some(outcome.display_text);
        self.transcript_scroll.jump_to_bottom();

        match &self.pending {
            Some(pending) if pending.has_changes() => self
                .notification
                .show("Suggested changes: Ctrl+A to accept, Ctrl+R to reject"),
            Some(_) => self
                .notification
                .show("Reply suggested no usable changes"),
            None => {}
        }
    }

    fn fail_reply(&mut self, error: &str) {
        if let Some(message) = self.awaiting.take()
            && self.message_text().is_empty()
        {
            self.set_message_text(&message);
        }
        self.notification.show_error(error);
    }

    /// Apply the pending suggestions to the form
    pub fn accept_suggestions(&mut self) {
        let Some(count) = self.pending.as_ref().map(|map| map.entries().len()) else {
            self.notification.show("No suggestions to apply");
            return;
        };

        let before = self.fields();
        let updated = planner::accept(&before, &mut self.pending);
        let changed = FieldName::ALL
            .iter()
            .filter(|field| before.get(**field) != updated.get(**field))
            .count();
        self.form.set_fields(&updated);

        log::debug!("Accepted {} suggestion entries, {} fields changed", count, changed);
        self.notification.show(&match changed {
            1 => "Applied 1 change".to_string(),
            n => format!("Applied {} changes", n),
        });
    }

    /// Drop the pending suggestions
    pub fn reject_suggestions(&mut self) {
        if self.pending.is_none() {
            self.notification.show("No suggestions to reject");
            return;
        }

        let fields = planner::reject(&self.fields(), &mut self.pending);
        self.form.set_fields(&fields);
        self.notification.show("Suggestions discarded");
    }

    /// Forget the conversation, including any reply still on its way
    pub fn clear_conversation(&mut self) {
        self.ai.discard_in_flight();
        self.history.clear();
        self.pending = None;
        self.awaiting = None;
        self.last_reply = None;
        self.transcript_scroll.reset();
        self.notification.show("Conversation cleared");
    }

    /// Turn suggestion requests on or off for future messages
    pub fn toggle_suggestions(&mut self) {
        self.request_suggestions = !self.request_suggestions;
        self.notification.show(if self.request_suggestions {
            "Suggestions on"
        } else {
            "Suggestions off"
        });
    }
}
