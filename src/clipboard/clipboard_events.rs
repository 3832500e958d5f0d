use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;

/// Ctrl+Y copies the latest reply
///
/// Returns true if the key was a copy key, whether or not anything was copied.
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_last_reply(app);
        return true;
    }

    false
}

fn copy_last_reply(app: &mut App) -> bool {
    let Some(reply) = app.last_reply.as_deref().filter(|r| !r.is_empty()) else {
        app.notification.show("Nothing to copy yet");
        return false;
    };

    match copy_to_clipboard(reply, app.clipboard_backend) {
        Ok(()) => {
            app.notification.show("Copied reply!");
            true
        }
        Err(e) => {
            app.notification.show_error(&format!("Copy failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
