use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use super::app_state::{App, Focus};
use crate::ai::ai_render;
use crate::form::render_form;
use crate::notification::render_notification;

/// Share of the width given to the form
const FORM_WIDTH_PERCENT: u16 = 40;
/// Message input height, borders included
const MESSAGE_HEIGHT: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());
        let (main_area, help_area) = (layout[0], layout[1]);

        let columns = Layout::horizontal([
            Constraint::Percentage(FORM_WIDTH_PERCENT),
            Constraint::Percentage(100 - FORM_WIDTH_PERCENT),
        ])
        .split(main_area);
        let (form_area, chat_area) = (columns[0], columns[1]);

        render_form(&mut self.form, self.focus.field(), frame, form_area);

        let panel_height = self
            .pending
            .as_ref()
            .map(|pending| ai_render::panel_height(pending, chat_area.width))
            .unwrap_or(0);
        let rows = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(panel_height),
            Constraint::Length(MESSAGE_HEIGHT),
        ])
        .split(chat_area);

        crate::chat::transcript_render::render_pane(self, frame, rows[0]);

        if let Some(pending) = &self.pending {
            ai_render::render_panel(pending, frame, rows[1]);
        }

        self.render_message_input(frame, rows[2]);

        if !render_notification(frame, help_area, &mut self.notification) {
            crate::help::help_line_render::render_line(self, frame, help_area);
        }
    }

    fn render_message_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::Message {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let title = if self.ai.loading {
            " Message (waiting for reply…) "
        } else {
            " Message "
        };

        self.message.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        self.message.set_cursor_style(if self.focus == Focus::Message {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

        frame.render_widget(&self.message, area);
    }
}
