use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{Counter, Snackbar, TaskList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub input: Rect,
    pub counter: Rect,
    pub list: Rect,
    pub snackbar: Rect,
}

impl ScreenLayout {
    /// Shared by rendering and mouse hit testing so both agree on geometry.
    pub fn new(area: Rect) -> Self {
        use Constraint::{Length, Min};
        let [title, input, counter, list, snackbar] = Layout::vertical([
            Length(1),
            Length(INPUT_HEIGHT),
            Length(1),
            Min(0),
            Length(1),
        ])
        .areas(area);
        Self {
            title,
            input,
            counter,
            list,
            snackbar,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = ScreenLayout::new(frame.area());

    TitleBar::new(tui.focus.hints()).render(frame, layout.title);

    tui.input_box.focused = tui.focus == Focus::Input;
    tui.input_box.render(frame, layout.input);

    Counter::new(app.counter_label(), app.completed_count(), app.total_count())
        .render(frame, layout.counter);

    TaskList::new(&mut tui.task_list, &app.tasks, tui.focus == Focus::List)
        .render(frame, layout.list);

    Snackbar {
        message: tui.snackbar.current(),
    }
    .render(frame, layout.snackbar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::task::TaskId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_layout_stacks_regions() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 20));
        assert_eq!(layout.title.y, 0);
        assert_eq!(layout.input.y, 1);
        assert_eq!(layout.input.height, INPUT_HEIGHT);
        assert_eq!(layout.counter.y, 4);
        assert_eq!(layout.list.y, 5);
        assert_eq!(layout.list.height, 14);
        assert_eq!(layout.snackbar.y, 19);
    }

    #[test]
    fn test_draw_empty_screen() {
        let app = App::new();
        let mut tui = TuiState::new(Duration::from_secs(4));
        let text = screen_text(&app, &mut tui);
        assert!(text.contains("QuickTasks"));
        assert!(text.contains("Enter task"));
        assert!(text.contains("Completed: 0 / 0"));
        assert!(text.contains("No tasks yet"));
    }

    #[test]
    fn test_draw_tasks_counter_and_snackbar() {
        let mut app = App::new();
        update(&mut app, Action::AddTask("Buy milk".to_string()));
        update(&mut app, Action::AddTask("Walk dog".to_string()));
        update(&mut app, Action::SetDone { id: TaskId(1), done: true });

        let mut tui = TuiState::new(Duration::from_secs(4));
        tui.snackbar.post("No completed tasks".to_string(), Instant::now());
        let text = screen_text(&app, &mut tui);

        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
        assert!(text.contains("[x]"));
        assert!(text.contains("[ ]"));
        assert!(text.contains("Completed: 1 / 2"));
        assert!(text.contains("No completed tasks"));
    }
}
