//! Help line rendering
//!
//! The bottom line shows key hints for the focused input when no
//! notification is active.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::{App, Focus};

/// Hint text for the current focus and state
pub fn help_text(app: &App) -> String {
    let focus_keys = match app.focus {
        Focus::Message if app.ai.loading => "Waiting for reply",
        Focus::Message => "Enter: Send",
        Focus::Field(field) if field.is_multiline() => "Enter: New line",
        Focus::Field(_) => "Enter: Next field",
        Focus::Transcript => "↑/↓/PgUp/PgDn: Scroll",
    };

    let mut parts = vec![" Tab: Next", focus_keys];
    if app.pending.is_some() {
        parts.push("Ctrl+A: Accept | Ctrl+R: Reject");
    }
    parts.push("Ctrl+Y: Copy | Ctrl+L: Clear");
    parts.push(if app.request_suggestions {
        "Ctrl+S: Suggestions on"
    } else {
        "Ctrl+S: Suggestions off"
    });
    parts.push("Esc: Quit");

    parts.join(" | ")
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
