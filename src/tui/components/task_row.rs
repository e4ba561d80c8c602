use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::task::Task;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Columns taken by the checkbox plus the gap before it.
const CHECKBOX_WIDTH: u16 = 4;
/// Borders (1 left + 1 right), padding, and the checkbox column.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2 + CHECKBOX_WIDTH;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";

/// A single task rendered as a card: text on the left, checkbox on the right.
///
/// Transient, like the rest of the list rows: built fresh each frame from a
/// `&Task` plus the selection flag owned by `TaskListState`.
#[derive(Clone, Copy)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    pub is_selected: bool,
}

impl<'a> TaskRow<'a> {
    pub fn new(task: &'a Task, is_selected: bool) -> Self {
        Self { task, is_selected }
    }

    /// Height this row needs at the given width, predicted with `textwrap`
    /// so the list can size its scroll canvas before rendering anything.
    pub fn calculate_height(task: &Task, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(&task.text, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for TaskRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = if self.task.done {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, checkbox_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(CHECKBOX_WIDTH)])
                .areas(inner);

        let row_style = if self.is_selected {
            text_style.bg(Color::DarkGray)
        } else {
            text_style
        };
        Paragraph::new(self.task.text.as_str())
            .style(row_style)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        let (mark, mark_style) = if self.task.done {
            (CHECKED, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            (UNCHECKED, Style::default())
        };
        Paragraph::new(mark)
            .style(mark_style)
            .alignment(ratatui::layout::Alignment::Right)
            .render(checkbox_area, buf);
    }
}
