//! # Actions
//!
//! Everything that can happen to the task list becomes an `Action`.
//! User presses Enter in the input? That's `Action::AddTask(text)`.
//! User ticks a checkbox? That's `Action::SetDone { id, done }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing what the adapter should do afterwards (clear the input,
//! show a notification, quit). The effect is never part of the transition
//! itself, so a notification can't delay or reorder state changes.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Invalid input (blank text, unknown id) is a silent no-op, never an error.

use log::{debug, info};

use crate::core::state::App;
use crate::core::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raw text from the input field. Trimmed before use.
    AddTask(String),
    /// Set a task's checkbox to an explicit value.
    SetDone { id: TaskId, done: bool },
    /// Flip a task's checkbox.
    ToggleTask(TaskId),
    ClearCompleted,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A task was accepted; the input buffer should be emptied.
    ClearInput,
    /// Transient message for the snackbar. Fire-and-forget.
    Notify(String),
    Quit,
}

/// Message shown after a bulk clear.
pub fn cleared_message(cleared: usize) -> String {
    if cleared > 0 {
        format!("Cleared {} task(s)", cleared)
    } else {
        "No completed tasks".to_string()
    }
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddTask(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return Effect::None;
            }
            let id = app.allocate_id();
            app.tasks.push(Task::new(id, text));
            info!("Added task {} ({} total)", id, app.tasks.len());
            Effect::ClearInput
        }
        Action::SetDone { id, done } => {
            set_done(app, id, done);
            Effect::None
        }
        Action::ToggleTask(id) => {
            if let Some(done) = app.task(id).map(|t| !t.done) {
                set_done(app, id, done);
            }
            Effect::None
        }
        Action::ClearCompleted => {
            // Count and filter over the same snapshot.
            let before = app.tasks.len();
            app.tasks.retain(|t| !t.done);
            let cleared = before - app.tasks.len();
            info!("Cleared {} completed task(s), {} remain", cleared, app.tasks.len());
            Effect::Notify(cleared_message(cleared))
        }
        Action::Quit => Effect::Quit,
    }
}

fn set_done(app: &mut App, id: TaskId, done: bool) {
    match app.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            *task = task.with_done(done);
            debug!("Task {} done={}", id, done);
        }
        None => debug!("Ignoring checkbox change for unknown task {}", id),
    }
}
