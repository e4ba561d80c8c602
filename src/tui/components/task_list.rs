//! # TaskList Component
//!
//! Scrollable view of the task cards.
//!
//! ## Responsibilities
//!
//! - Display the list of tasks, one `TaskRow` each
//! - Track the keyboard selection and keep it on screen
//! - Hit testing for mouse clicks
//! - Cache row heights for scrolling and hit testing
//!
//! ## Architecture
//!
//! `TaskList` is a transient component (created each frame) that wraps
//! `&'a mut TaskListState` (persistent state) and the task slice (props).
//! Because `Component::render` takes `&mut self`, the layout cache and
//! scroll state are updated during the render pass.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::task::{Task, TaskId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::empty_state::EmptyState;
use crate::tui::components::task_row::TaskRow;
use crate::tui::event::TuiEvent;

/// High-level events emitted by the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListEvent {
    /// Space/Enter on the selected row. Carries the row index.
    ToggleSelected(usize),
}

/// Scroll, selection and layout state for the task list.
/// Persisted in the parent `TuiState`.
pub struct TaskListState {
    pub scroll_state: ScrollViewState,
    /// Selected row index (keyboard navigation)
    pub selected_index: Option<usize>,
    /// Row heights from the last render
    pub heights: Vec<u16>,
    /// Running sums of `heights`: `prefix_heights[i]` is the bottom edge of row `i`
    pub prefix_heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected_index: None,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Recompute the height cache for `tasks` at `width`.
    pub fn measure(&mut self, tasks: &[Task], width: u16) {
        self.heights = tasks
            .iter()
            .map(|task| TaskRow::calculate_height(task, width))
            .collect();
        let mut total = 0u16;
        self.prefix_heights = self
            .heights
            .iter()
            .map(|h| {
                total = total.saturating_add(*h);
                total
            })
            .collect();
    }

    fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Keep the selection valid after the list shrank (e.g. bulk clear).
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(idx) if idx >= len => Some(len - 1),
            other => other,
        };
    }

    /// Id of the task under the selection, if any.
    pub fn selected_task(&self, tasks: &[Task]) -> Option<TaskId> {
        self.selected_index
            .and_then(|idx| tasks.get(idx))
            .map(|task| task.id)
    }

    /// Re-point the selection at `selected` after rows were removed, so it
    /// stays on the same task. Falls back to clamping when that task is gone.
    pub fn follow_task(&mut self, selected: Option<TaskId>, tasks: &[Task]) {
        if let Some(idx) = selected.and_then(|id| tasks.iter().position(|t| t.id == id)) {
            self.selected_index = Some(idx);
        }
        self.clamp_selection(tasks.len());
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self, len: usize) {
        if self.selected_index.is_none() && len > 0 {
            self.selected_index = Some(0);
        }
        self.clamp_selection(len);
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        if idx >= self.prefix_heights.len() {
            return;
        }

        let item_top = if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        };
        let item_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y.min(item_top) });
        }
    }

    /// Given a screen row inside `list_area`, find which task row is under it.
    pub fn hit_test(&self, screen_y: u16, list_area: Rect) -> Option<usize> {
        if screen_y < list_area.y || screen_y >= list_area.bottom() {
            return None;
        }
        let content_y = (screen_y - list_area.y).saturating_add(self.scroll_state.offset().y);
        self.prefix_heights.iter().position(|&bottom| content_y < bottom)
    }

    fn select_offset(&mut self, delta: isize) {
        let len = self.heights.len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        let next = match self.selected_index {
            None => 0,
            Some(idx) => idx.saturating_add_signed(delta).min(len - 1),
        };
        self.selected_index = Some(next);
        self.scroll_to_selected();
    }
}

/// Scrollable task view. Created fresh each frame with references to state and data.
pub struct TaskList<'a> {
    pub state: &'a mut TaskListState,
    pub tasks: &'a [Task],
    /// Only the focused list shows its selection
    pub focused: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(state: &'a mut TaskListState, tasks: &'a [Task], focused: bool) -> Self {
        Self {
            state,
            tasks,
            focused,
        }
    }
}

impl<'a> Component for TaskList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.tasks.is_empty() {
            self.state.measure(self.tasks, area.width);
            EmptyState.render(frame, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.measure(self.tasks, content_width);
        self.state.clamp_selection(self.tasks.len());
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.total_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, task) in self.tasks.iter().enumerate() {
            let height = self.state.heights[i];
            let is_selected = self.focused && self.state.selected_index == Some(i);
            let row_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(TaskRow::new(task, is_selected), row_rect);
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Event handling lives on `TaskListState` because `TaskList` is rebuilt
/// every frame and can't carry scroll position between events.
impl EventHandler for TaskListState {
    type Event = TaskListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::CursorUp => {
                self.select_offset(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.select_offset(1);
                None
            }
            TuiEvent::CursorHome => {
                if !self.heights.is_empty() {
                    self.selected_index = Some(0);
                    self.scroll_to_selected();
                }
                None
            }
            TuiEvent::CursorEnd => {
                if let Some(last) = self.heights.len().checked_sub(1) {
                    self.selected_index = Some(last);
                    self.scroll_to_selected();
                }
                None
            }
            TuiEvent::InputChar(' ') | TuiEvent::Submit => {
                self.selected_index.map(TaskListEvent::ToggleSelected)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tasks(texts: &[&str]) -> Vec<Task> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Task::new(TaskId(i as u32 + 1), *t))
            .collect()
    }

    fn render(state: &mut TaskListState, tasks: &[Task], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| TaskList::new(state, tasks, true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_rows() {
        let list = tasks(&["Buy milk", "Walk dog"]);
        let mut state = TaskListState::new();
        let text = render(&mut state, &list, 40, 10);
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
        assert_eq!(state.heights, vec![3, 3]);
        assert_eq!(state.prefix_heights, vec![3, 6]);
    }

    #[test]
    fn test_render_empty_shows_hint() {
        let mut state = TaskListState::new();
        let text = render(&mut state, &[], 60, 5);
        assert!(text.contains("No tasks yet"));
    }

    #[test]
    fn test_hit_test() {
        let list = tasks(&["a", "b", "c"]);
        let mut state = TaskListState::new();
        state.measure(&list, 40);
        let area = Rect::new(0, 5, 40, 20);

        assert_eq!(state.hit_test(4, area), None);
        assert_eq!(state.hit_test(5, area), Some(0));
        assert_eq!(state.hit_test(7, area), Some(0));
        assert_eq!(state.hit_test(8, area), Some(1));
        assert_eq!(state.hit_test(13, area), Some(2));
        assert_eq!(state.hit_test(14, area), None);
    }

    #[test]
    fn test_navigation_clamps() {
        let list = tasks(&["a", "b"]);
        let mut state = TaskListState::new();
        state.measure(&list, 40);
        state.viewport_height = 10;

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_index, Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_index, Some(1));
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_space_toggles_selected() {
        let mut state = TaskListState::new();
        assert_eq!(state.handle_event(&TuiEvent::InputChar(' ')), None);

        state.selected_index = Some(1);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' ')),
            Some(TaskListEvent::ToggleSelected(1))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(TaskListEvent::ToggleSelected(1))
        );
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut state = TaskListState::new();
        state.selected_index = Some(4);
        state.clamp_selection(2);
        assert_eq!(state.selected_index, Some(1));
        state.clamp_selection(0);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_follow_task_keeps_selected_id() {
        let mut list = tasks(&["a", "b", "c"]);
        let mut state = TaskListState::new();
        state.selected_index = Some(1);
        let selected = state.selected_task(&list);
        assert_eq!(selected, Some(TaskId(2)));

        list.remove(0);
        state.follow_task(selected, &list);
        assert_eq!(state.selected_index, Some(0));
        assert_eq!(state.selected_task(&list), Some(TaskId(2)));
    }

    #[test]
    fn test_follow_task_clamps_when_removed() {
        let mut list = tasks(&["a", "b", "c"]);
        let mut state = TaskListState::new();
        state.selected_index = Some(2);
        let selected = state.selected_task(&list);

        list.truncate(2);
        state.follow_task(selected, &list);
        assert_eq!(state.selected_index, Some(1));

        state.follow_task(Some(TaskId(1)), &[]);
        assert_eq!(state.selected_index, None);
    }

    #[test]
    fn test_hit_test_saturates_on_huge_offsets() {
        let mut state = TaskListState::new();
        state.heights = vec![u16::MAX, 3];
        state.prefix_heights = vec![u16::MAX, u16::MAX];
        state.scroll_state.set_offset(Position { x: 0, y: u16::MAX - 1 });
        let area = Rect::new(0, 5, 40, 20);

        assert_eq!(state.hit_test(24, area), None);
        assert_eq!(state.hit_test(5, area), Some(0));
    }

    #[test]
    fn test_scroll_to_selected_moves_viewport() {
        let list = tasks(&["a", "b", "c", "d", "e"]);
        let mut state = TaskListState::new();
        state.measure(&list, 40);
        state.viewport_height = 6;

        state.selected_index = Some(4);
        state.scroll_to_selected();
        // Row 4 spans 12..15, so the viewport must start at 9
        assert_eq!(state.scroll_state.offset().y, 9);

        state.selected_index = Some(0);
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
