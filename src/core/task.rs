//! # Task
//!
//! The one entity QuickTasks knows about: a short line of text and a
//! completion flag.

use std::fmt;

/// Identity key for a task. Unique for the lifetime of an `App`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Trimmed, never empty.
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Returns a copy with `done` replaced.
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }
}
