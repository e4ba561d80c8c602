//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → dispatch() → Action → core::update() → Effect
//!                                                                       │
//!                      input_box.clear() / snackbar.post() / quit  ◄────┘
//! ```
//!
//! Every event runs to completion before the next is read, so each state
//! transition is atomic with respect to rendering.
//!
//! ## Redraw Strategy
//!
//! The loop only redraws after events or when the snackbar changes. While a
//! snackbar message is visible it polls every 100ms so the message expires
//! on time; otherwise it sleeps up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, SnackbarState, TaskListEvent, TaskListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ScreenLayout;

const ACTIVE_POLL: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which area receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing into the new-task field. Enter adds.
    Input,
    /// Moving through the list. Space/Enter toggles the selected checkbox.
    List,
}

impl Focus {
    pub fn hints(self) -> &'static str {
        match self {
            Focus::Input => "Enter add · Tab list · Ctrl+D clear done · Ctrl+C quit",
            Focus::List => "Space toggle · Tab input · Ctrl+D clear done · q quit",
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub task_list: TaskListState,
    pub snackbar: SnackbarState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(snackbar_duration: Duration) -> Self {
        Self {
            input_box: InputBox::new(),
            task_list: TaskListState::new(),
            snackbar: SnackbarState::new(snackbar_duration),
            focus: Focus::Input, // User expects to type immediately
        }
    }

    fn focus_list(&mut self, len: usize) {
        self.focus = Focus::List;
        self.task_list.ensure_selection(len);
        self.task_list.scroll_to_selected();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        let mut app = App::new();
        let mut tui = TuiState::new(config.snackbar_duration);
        event_loop(&mut terminal, &mut app, &mut tui)
    });
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.snackbar.tick(Instant::now()) {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if tui.snackbar.is_active() {
            ACTIVE_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if dispatch(app, tui, event, frame_area, Instant::now()) {
                info!("Quitting with {} task(s) in memory", app.tasks.len());
                return Ok(());
            }
        }
    }
}

/// Route one event through the focused component and into the core.
/// Returns true when the app should quit.
pub fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
    now: Instant,
) -> bool {
    match event {
        // Redraw is already flagged by the caller
        TuiEvent::Resize => false,

        // Ctrl+C always quits regardless of focus
        TuiEvent::ForceQuit => apply(app, tui, Action::Quit, now),

        TuiEvent::ClearCompleted => {
            let selected = tui.task_list.selected_task(&app.tasks);
            let quit = apply(app, tui, Action::ClearCompleted, now);
            tui.task_list.follow_task(selected, &app.tasks);
            quit
        }

        TuiEvent::MouseClick(col, row) => {
            handle_click(app, tui, Position::new(col, row), frame_area, now)
        }

        // Scrolling always goes to the list regardless of focus
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.task_list.handle_event(&event);
            false
        }

        TuiEvent::SwitchFocus => {
            match tui.focus {
                Focus::Input => tui.focus_list(app.tasks.len()),
                Focus::List => tui.focus = Focus::Input,
            }
            false
        }

        _ => match tui.focus {
            Focus::Input => handle_input_focus(app, tui, event, now),
            Focus::List => handle_list_focus(app, tui, event, now),
        },
    }
}

fn handle_input_focus(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: Instant) -> bool {
    match event {
        TuiEvent::Escape | TuiEvent::CursorDown => {
            tui.focus_list(app.tasks.len());
            false
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit(text)) => apply(app, tui, Action::AddTask(text), now),
            Some(InputEvent::ContentChanged) | None => false,
        },
    }
}

fn handle_list_focus(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: Instant) -> bool {
    match event {
        TuiEvent::Escape => {
            tui.focus = Focus::Input;
            false
        }
        TuiEvent::InputChar('q') => apply(app, tui, Action::Quit, now),
        // Typing switches back to the input and forwards the keystroke
        TuiEvent::InputChar(c) if c != ' ' => {
            tui.focus = Focus::Input;
            tui.input_box.handle_event(&event);
            false
        }
        TuiEvent::Paste(_) => {
            tui.focus = Focus::Input;
            tui.input_box.handle_event(&event);
            false
        }
        _ => match tui.task_list.handle_event(&event) {
            Some(TaskListEvent::ToggleSelected(idx)) => toggle_row(app, tui, idx, now),
            None => false,
        },
    }
}

fn handle_click(
    app: &mut App,
    tui: &mut TuiState,
    position: Position,
    frame_area: Rect,
    now: Instant,
) -> bool {
    let layout = ScreenLayout::new(frame_area);

    if InputBox::add_button_area(layout.input).contains(position) {
        let text = tui.input_box.buffer.clone();
        return apply(app, tui, Action::AddTask(text), now);
    }
    if layout.input.contains(position) {
        tui.focus = Focus::Input;
        return false;
    }
    if let Some(idx) = tui.task_list.hit_test(position.y, layout.list) {
        tui.focus = Focus::List;
        tui.task_list.selected_index = Some(idx);
        return toggle_row(app, tui, idx, now);
    }
    false
}

/// Flip the checkbox of the task shown at row `idx`.
fn toggle_row(app: &mut App, tui: &mut TuiState, idx: usize, now: Instant) -> bool {
    let Some(task) = app.tasks.get(idx) else {
        return false;
    };
    let action = Action::SetDone {
        id: task.id,
        done: !task.done,
    };
    apply(app, tui, action, now)
}

/// Run an action through the core and carry out the resulting effect.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, now: Instant) -> bool {
    let effect = update(app, action);
    debug!("Effect: {:?}", effect);
    match effect {
        Effect::None => false,
        Effect::ClearInput => {
            tui.input_box.clear();
            false
        }
        Effect::Notify(message) => {
            tui.snackbar.post(message, now);
            false
        }
        Effect::Quit => true,
    }
}
