//! Cursor position and horizontal scrolling for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and the first visible display
//! column. All methods accept `buffer: &str` explicitly — the text itself is
//! owned by `InputBox`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First display column shown in the field
    pub scroll_col: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_col: 0,
        }
    }

    /// Reset cursor to start (used after the buffer is cleared).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_col = 0;
    }

    pub fn move_left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.pos != 0;
        self.pos = 0;
        moved
    }

    pub fn move_end(&mut self, buffer: &str) -> bool {
        let moved = self.pos != buffer.len();
        self.pos = buffer.len();
        moved
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Scroll so the cursor stays inside a field `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: usize) {
        if width == 0 {
            self.scroll_col = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + width {
            // Leave one cell for the cursor itself
            self.scroll_col = col + 1 - width;
        }
    }
}

/// The slice of `buffer` visible from display column `scroll_col`, at most
/// `width` columns wide. Wide characters straddling either edge are dropped.
pub(super) fn visible_slice(buffer: &str, scroll_col: usize, width: usize) -> &str {
    let mut col = 0;
    let mut start = buffer.len();
    let mut end = buffer.len();
    for (i, c) in buffer.char_indices() {
        let w = c.width().unwrap_or(0);
        if start == buffer.len() && col >= scroll_col {
            start = i;
        }
        if col + w > scroll_col + width {
            end = i;
            break;
        }
        col += w;
    }
    if start > end {
        return "";
    }
    &buffer[start..end]
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
