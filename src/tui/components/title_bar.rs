//! # TitleBar Component
//!
//! Top bar: the app name on the left, key hints for the focused area on
//! the right.
//!
//! Stateless. The hint text is a prop so the parent decides which hints
//! apply to the current focus:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(tui.focus.hints());
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "QuickTasks";

pub struct TitleBar {
    /// Key hints for the focused area (e.g. "Enter add · Tab list")
    pub hints: String,
}

impl TitleBar {
    pub fn new(hints: impl Into<String>) -> Self {
        Self {
            hints: hints.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, area);

        // Hints only if they fit next to the title
        let hints_width = self.hints.chars().count() as u16;
        if area.width > APP_TITLE.len() as u16 + 2 + hints_width {
            let hints = Line::from(Span::styled(
                self.hints.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(hints, area);
        }
    }
}
