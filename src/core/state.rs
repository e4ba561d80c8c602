//! # Application State
//!
//! Core business state for QuickTasks. Domain data only - the input
//! buffer, scroll position and snackbar live in the `tui` module.
//!
//! ```text
//! App
//! ├── tasks: Vec<Task>     // ordered, append-only except bulk clear
//! └── next_id: u32         // monotonic id counter, never reused
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::task::{Task, TaskId};

pub struct App {
    pub tasks: Vec<Task>,
    next_id: u32,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Hands out the next task id. Ids keep counting up across clears, so a
    /// task added after a clear never shares an id with an earlier one.
    pub(crate) fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Counter text shown above the list, e.g. `"Completed: 1 / 2"`.
    pub fn counter_label(&self) -> String {
        format!(
            "Completed: {} / {}",
            self.completed_count(),
            self.total_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_is_empty() {
        let app = App::new();
        assert!(app.tasks.is_empty());
        assert_eq!(app.completed_count(), 0);
        assert_eq!(app.counter_label(), "Completed: 0 / 0");
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let mut app = App::new();
        assert_eq!(app.allocate_id(), TaskId(1));
        assert_eq!(app.allocate_id(), TaskId(2));
        assert_eq!(app.allocate_id(), TaskId(3));
    }

    #[test]
    fn test_counts_follow_done_flags() {
        let mut app = App::new();
        app.tasks.push(Task::new(TaskId(1), "a").with_done(true));
        app.tasks.push(Task::new(TaskId(2), "b"));
        app.tasks.push(Task::new(TaskId(3), "c").with_done(true));
        assert_eq!(app.completed_count(), 2);
        assert_eq!(app.total_count(), 3);
        assert_eq!(app.counter_label(), "Completed: 2 / 3");
    }

    #[test]
    fn test_task_lookup() {
        let mut app = App::new();
        app.tasks.push(Task::new(TaskId(5), "five"));
        assert_eq!(app.task(TaskId(5)).map(|t| t.text.as_str()), Some("five"));
        assert!(app.task(TaskId(6)).is_none());
    }
}
