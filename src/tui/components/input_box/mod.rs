//! # InputBox Component
//!
//! The "new task" field: a single-line text input with an `Add` button.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit the raw buffer on submission (Enter or clicking `Add`)
//! - Show a placeholder while empty
//!
//! ## State Management
//!
//! The buffer is internal state. Submitting does *not* clear it: the parent
//! calls [`InputBox::clear`] only when the core accepted the task, so a
//! rejected (blank) submission leaves whatever was typed in place.

mod cursor;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary, visible_slice};

pub const PLACEHOLDER: &str = "Enter task";
const ADD_LABEL: &str = "[ Add ]";
/// Width reserved for the Add button inside the border.
pub const ADD_BUTTON_WIDTH: u16 = ADD_LABEL.len() as u16 + 1;
/// Border top + bottom, one content line.
pub const INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the buffer (untrimmed; the core decides validity)
    Submit(String),
    ContentChanged,
}

/// Single-line text input with an Add button.
///
/// # Props
///
/// - `focused`: whether keystrokes go here (dims the border otherwise)
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Empty the buffer after an accepted add.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }

    /// Area of the Add button for a given input area (used for hit testing).
    pub fn add_button_area(area: Rect) -> Rect {
        let [_, button] = Self::split(area);
        button
    }

    fn split(area: Rect) -> [Rect; 2] {
        let inner = Block::bordered().inner(area);
        Layout::horizontal([Constraint::Min(0), Constraint::Length(ADD_BUTTON_WIDTH)])
            .areas(inner)
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("New task");
        frame.render_widget(block, area);

        let [text_area, button_area] = Self::split(area);
        let width = text_area.width as usize;
        self.cursor.update_scroll(&self.buffer, width);

        let text = if self.buffer.is_empty() {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(visible_slice(&self.buffer, self.cursor.scroll_col, width))
        };
        frame.render_widget(text, text_area);

        let button = Paragraph::new(Span::styled(
            ADD_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(ratatui::layout::Alignment::Right);
        frame.render_widget(button, button_area);

        if self.focused && text_area.width > 0 {
            let offset = self.cursor.column(&self.buffer) - self.cursor.scroll_col;
            let x = text_area.x + (offset as u16).min(text_area.width - 1);
            frame.set_cursor_position((x, text_area.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Task text is a single line
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flat);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => self
                .cursor
                .move_left(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .move_right(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorHome => self.cursor.move_home().then_some(InputEvent::ContentChanged),
            TuiEvent::CursorEnd => self
                .cursor
                .move_end(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn rendered_text(input: &mut InputBox, width: u16) -> String {
        let backend = TestBackend::new(width, INPUT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(input.focused);
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        type_text(&mut input, "b");
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_edit_in_middle() {
        let mut input = InputBox::new();
        type_text(&mut input, "Buy mlk");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::CursorLeft);
        type_text(&mut input, "i");
        assert_eq!(input.buffer, "Buy milk");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "uy milk");
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn test_submit_does_not_clear() {
        let mut input = InputBox::new();
        type_text(&mut input, "hello");

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("hello".to_string())));
        assert_eq!(input.buffer, "hello");

        input.clear();
        assert!(input.buffer.is_empty());
        // Cursor went back to the start with the buffer
        type_text(&mut input, "x");
        assert_eq!(input.buffer, "x");
    }

    #[test]
    fn test_submit_blank_passes_raw_text() {
        let mut input = InputBox::new();
        type_text(&mut input, "   ");
        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("   ".to_string())));
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("Buy\nmilk\r\n".to_string()));
        assert_eq!(input.buffer, "Buy milk  ");
    }

    #[test]
    fn test_render_placeholder_and_button() {
        let mut input = InputBox::new();
        let text = rendered_text(&mut input, 40);
        assert!(text.contains("New task"));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("[ Add ]"));
    }

    #[test]
    fn test_render_scrolls_long_text() {
        let mut input = InputBox::new();
        type_text(&mut input, "abcdefghijklmnopqrstuvwxyz0123456789");
        let text = rendered_text(&mut input, 30);
        // Cursor is at the end, so the tail stays visible
        assert!(text.contains("789"));
        assert!(!text.contains("abc"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_add_button_area_is_inside_border() {
        let area = Rect::new(0, 0, 40, INPUT_HEIGHT);
        let button = InputBox::add_button_area(area);
        assert_eq!(button.y, 1);
        assert_eq!(button.width, ADD_BUTTON_WIDTH);
        assert_eq!(button.x + button.width, 39);
    }
}
