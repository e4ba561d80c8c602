//! # TUI Components
//!
//! All UI components for the terminal screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and key hints
//! - `Counter`: the "Completed: X / Y" line
//! - `TaskRow`: one task card (text + checkbox)
//! - `EmptyState`: hint shown when there are no tasks
//! - `Snackbar`: the current transient message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: the new-task field and its Add button
//! - `TaskListState` / `TaskList`: scrollable task cards with selection
//! - `SnackbarState`: queue of transient messages
//!
//! Components receive external data as props, never by reaching into the
//! core `App`, so each one can be rendered against a `TestBackend` alone.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── counter.rs
//! ├── input_box/       (text field + cursor tracking)
//! ├── task_row.rs
//! ├── task_list.rs
//! ├── empty_state.rs
//! └── snackbar.rs
//! ```

mod counter;
mod empty_state;
pub mod input_box;
pub mod snackbar;
pub mod task_list;
pub mod task_row;
mod title_bar;

pub use counter::Counter;
pub use input_box::{InputBox, InputEvent};
pub use snackbar::{Snackbar, SnackbarState};
pub use task_list::{TaskList, TaskListEvent, TaskListState};
pub use title_bar::TitleBar;
