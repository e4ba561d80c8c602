//! # Empty State Component
//!
//! Shown in place of the list while there are no tasks.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct EmptyState;

impl Component for EmptyState {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "No tasks yet",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Type above and press Enter to add one",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
