//! # Snackbar Component
//!
//! Transient status messages along the bottom of the screen.
//!
//! Messages are queued and shown one at a time, each for `duration`. Posting
//! never blocks: the event loop keeps mutating state while a message is on
//! screen, and [`SnackbarState::tick`] retires it once its time is up.
//!
//! Time is passed in explicitly (`now: Instant`) so the queue is testable
//! without sleeping.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct SnackbarState {
    duration: Duration,
    current: Option<(String, Instant)>,
    pending: VecDeque<String>,
}

impl SnackbarState {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            current: None,
            pending: VecDeque::new(),
        }
    }

    /// Queue a message. Shown immediately if nothing else is on screen.
    pub fn post(&mut self, message: String, now: Instant) {
        log::debug!("Snackbar: {}", message);
        if self.current.is_none() {
            self.current = Some((message, now));
        } else {
            self.pending.push_back(message);
        }
    }

    /// Expire the current message if its time is up and promote the next one.
    /// Returns true if what's on screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|(_, shown_at)| now.saturating_duration_since(*shown_at) >= self.duration);
        if !expired {
            return false;
        }
        self.current = self.pending.pop_front().map(|next| (next, now));
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

/// Renders the current message, or nothing when the queue is idle.
pub struct Snackbar<'a> {
    pub message: Option<&'a str>,
}

impl<'a> Component for Snackbar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(message) = self.message else {
            return;
        };
        let line = Line::from(Span::styled(
            format!(" {} ", message),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
