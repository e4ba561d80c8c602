//! # Core Application Logic
//!
//! This module contains the QuickTasks business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Task (the entity)    │
//!                    │  • App (task list)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: The `Task` record and its id type
//! - [`state`]: The `App` struct — the ordered task list
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod state;
pub mod task;
