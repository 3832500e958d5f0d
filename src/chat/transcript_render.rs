//! Transcript pane rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::turn::{ConversationTurn, Role};
use crate::ai::render::text::wrap_text;
use crate::app::{App, Focus};

const EMPTY_HINT: &str = "No messages yet. Ask the planner for ideas.";
const THINKING: &str = "thinking…";

fn speaker_style(role: Role) -> Style {
    let color = match role {
        Role::User => Color::Cyan,
        Role::Assistant => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn push_turn(lines: &mut Vec<Line<'static>>, role: Role, content: &str, width: u16) {
    lines.push(Line::from(Span::styled(role.display_name(), speaker_style(role))));
    for text_line in wrap_text(content, width as usize) {
        lines.push(Line::from(text_line));
    }
    lines.push(Line::from(""));
}

/// Build the transcript lines, oldest turn first
///
/// `awaiting` is a message already sent whose reply has not arrived; it is
/// shown after the history followed by a thinking line.
pub fn transcript_lines(
    history: &[ConversationTurn],
    awaiting: Option<&str>,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for turn in history {
        push_turn(&mut lines, turn.role, &turn.content, width);
    }

    if let Some(message) = awaiting {
        push_turn(&mut lines, Role::User, message, width);
        lines.push(Line::from(Span::styled(
            Role::Assistant.display_name(),
            speaker_style(Role::Assistant),
        )));
        lines.push(Line::from(Span::styled(
            THINKING,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

/// Render the transcript pane, keeping the scroll bounds current
pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let border_color = if app.focus == Focus::Transcript {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversation ")
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", app.ai.provider_label),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let lines = transcript_lines(&app.history, app.awaiting.as_deref(), inner.width);

    app.transcript_scroll
        .update_bounds(lines.len() as u32, inner.height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.transcript_scroll.offset, 0));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "transcript_render_tests.rs"]
mod transcript_render_tests;
