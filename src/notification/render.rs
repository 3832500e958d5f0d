use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{NotificationLevel, NotificationState};

/// Draw the current notification into `area`
///
/// Expired notifications are cleared first. Returns false when nothing was
/// drawn, so the caller can fill the line with something else.
pub fn render_notification(frame: &mut Frame, area: Rect, state: &mut NotificationState) -> bool {
    state.clear_if_expired();

    let Some(notification) = state.current() else {
        return false;
    };

    let color = match notification.level {
        NotificationLevel::Info => Color::Green,
        NotificationLevel::Warning => Color::Yellow,
        NotificationLevel::Error => Color::Red,
    };

    let line = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(color)),
        Span::styled(
            notification.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut NotificationState) -> (bool, String) {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let mut drawn = false;
        terminal
            .draw(|f| {
                let area = f.area();
                drawn = render_notification(f, area, state);
            })
            .unwrap();
        (drawn, terminal.backend().to_string())
    }

    #[test]
    fn test_nothing_drawn_without_notification() {
        let mut state = NotificationState::new();
        let (drawn, output) = render(&mut state);
        assert!(!drawn);
        assert!(output.trim_matches(|c: char| c == '"' || c.is_whitespace()).is_empty());
    }

    #[test]
    fn test_message_is_drawn() {
        let mut state = NotificationState::new();
        state.show("Suggestions applied");
        let (drawn, output) = render(&mut state);
        assert!(drawn);
        assert!(output.contains("Suggestions applied"));
    }
}
