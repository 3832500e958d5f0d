//! Suggestion panel lines
//!
//! One entry per key in the pending map: changes as `Label: value`, explicit
//! nulls as unchanged, unknown keys as ignored.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ai::suggestion::{SuggestionEntry, SuggestionMap};

/// Build the panel lines for `suggestions`
///
/// # Arguments
/// * `suggestions` - The pending suggestion map
/// * `max_width` - Maximum width for text wrapping
/// * `wrap_text_fn` - Function to wrap text to fit width
pub fn render_suggestions<F>(
    suggestions: &SuggestionMap,
    max_width: u16,
    wrap_text_fn: F,
) -> Vec<Line<'static>>
where
    F: Fn(&str, usize) -> Vec<String>,
{
    let mut lines: Vec<Line> = Vec::new();

    for entry in suggestions.entries() {
        match entry {
            SuggestionEntry::Change { field, value } => {
                let prefix = format!("{}: ", field.label());
                let prefix_len = prefix.chars().count();
                let value_width = max_width.saturating_sub(prefix_len as u16) as usize;
                let value_lines = wrap_text_fn(&value, value_width);

                let label_style = Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD);
                let value_style = Style::default().fg(Color::Cyan);

                for (i, value_line) in value_lines.into_iter().enumerate() {
                    if i == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(prefix.clone(), label_style),
                            Span::styled(value_line, value_style),
                        ]));
                    } else {
                        lines.push(Line::from(Span::styled(
                            format!("{}{}", " ".repeat(prefix_len), value_line),
                            value_style,
                        )));
                    }
                }
            }
            SuggestionEntry::Unchanged { field } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", field.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        "(unchanged)",
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]));
            }
            SuggestionEntry::Ignored { key } => {
                lines.push(Line::from(Span::styled(
                    format!("{}: (ignored, not an event field)", key),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    lines
}
