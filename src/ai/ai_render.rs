//! Pending suggestion panel
//!
//! Shown between the transcript and the message input while the model's
//! proposed edits wait for accept or reject.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::render::suggestions::render_suggestions;
use super::render::text::wrap_text;
use super::suggestion::SuggestionMap;

/// Borders take one cell on each side
const BORDER_SIZE: u16 = 2;
/// The panel never grows past this, including borders
pub const MAX_PANEL_HEIGHT: u16 = 10;

/// Height the panel needs for `suggestions` at `width` columns
pub fn panel_height(suggestions: &SuggestionMap, width: u16) -> u16 {
    let inner_width = width.saturating_sub(BORDER_SIZE);
    let lines = render_suggestions(suggestions, inner_width, wrap_text).len() as u16;
    (lines.max(1) + BORDER_SIZE).min(MAX_PANEL_HEIGHT)
}

/// Render the suggestion panel into `area`
pub fn render_panel(suggestions: &SuggestionMap, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggested changes ")
        .title_bottom(
            Line::from(Span::styled(
                " Ctrl+A accept | Ctrl+R reject ",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        )
        .border_style(Style::default().fg(Color::Yellow));

    let inner_width = block.inner(area).width;
    let lines = render_suggestions(suggestions, inner_width, wrap_text);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "ai_render_tests.rs"]
mod ai_render_tests;
