//! # Counter Component
//!
//! The "Completed: X / Y" line between the input and the list.
//! Stateless; both numbers are props derived from the core `App`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Counter {
    pub label: String,
    /// Everything checked off (and at least one task)
    pub all_done: bool,
}

impl Counter {
    pub fn new(label: String, completed: usize, total: usize) -> Self {
        Self {
            label,
            all_done: total > 0 && completed == total,
        }
    }
}

impl Component for Counter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.all_done {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        frame.render_widget(Line::from(Span::styled(self.label.as_str(), style)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_all_done_flag() {
        assert!(!Counter::new(String::new(), 0, 0).all_done);
        assert!(!Counter::new(String::new(), 1, 2).all_done);
        assert!(Counter::new(String::new(), 2, 2).all_done);
    }

    #[test]
    fn test_render_label() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut counter = Counter::new("Completed: 1 / 2".to_string(), 1, 2);

        terminal.draw(|f| counter.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.starts_with("Completed: 1 / 2"));
    }
}
