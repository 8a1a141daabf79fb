//! Focus changes across panels and cursor/reorder operations within the
//! focused panel.

use crate::{board::Board, day::Day, task::Task};

impl Board {
    pub fn next_tab(&mut self) {
        self.focus = self.focus.cycle_next();
    }

    pub fn previous_tab(&mut self) {
        self.focus = self.focus.cycle_prev();
    }

    pub fn select_tab(&mut self, day: Day) {
        self.focus = day;
    }

    pub fn select_next(&mut self) {
        self.focused_panel_mut().select_next();
    }

    pub fn select_previous(&mut self) {
        self.focused_panel_mut().select_prev();
    }

    /// Select the task at `index` in the focused panel. Out-of-range
    /// indexes leave the selection alone.
    pub fn select_task(&mut self, index: usize) -> bool {
        let panel = self.focused_panel_mut();
        if index >= panel.len() {
            return false;
        }
        panel.select(index);
        true
    }

    /// Swap the selected task with its predecessor. No-op on the first task.
    pub fn move_up(&mut self) -> bool {
        self.focused_panel_mut().shift_selected(true)
    }

    /// Swap the selected task with its successor. No-op on the last task.
    pub fn move_down(&mut self) -> bool {
        self.focused_panel_mut().shift_selected(false)
    }

    pub fn toggle_done(&mut self) -> bool {
        match self.focused_panel_mut().selected_task_mut() {
            Some(task) => {
                task.toggle_done();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self) -> Option<Task> {
        self.focused_panel_mut().remove_selected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(names: &[&str]) -> Board {
        Board::from_tasks(names.iter().enumerate().map(|(pos, name)| Task {
            name: name.to_string(),
            day: Day::INBOX,
            done: false,
            pos: pos as i64,
        }))
    }

    fn names(board: &Board) -> Vec<&str> {
        board
            .focused_panel()
            .tasks()
            .iter()
            .map(|t| t.name.as_str())
            .collect()
    }

    #[test]
    fn test_next_tab_wraps_to_inbox() {
        let mut board = Board::new();
        board.select_tab(Day::SUNDAY);
        board.next_tab();
        assert_eq!(board.focus(), Day::INBOX);
    }

    #[test]
    fn test_previous_tab_wraps_to_sunday() {
        let mut board = Board::new();
        board.previous_tab();
        assert_eq!(board.focus(), Day::SUNDAY);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut board = Board::new();
        for _ in 0..Day::COUNT {
            board.next_tab();
        }
        assert_eq!(board.focus(), Day::INBOX);
    }

    #[test]
    fn test_move_up_on_first_is_noop() {
        let mut board = board_with(&["a", "b"]);
        board.focused_panel_mut().select(0);
        assert!(!board.move_up());
        assert_eq!(names(&board), vec!["a", "b"]);
        assert_eq!(board.focused_panel().selected_index(), Some(0));
    }

    #[test]
    fn test_move_down_on_last_is_noop() {
        let mut board = board_with(&["a", "b"]);
        board.focused_panel_mut().select(1);
        assert!(!board.move_down());
        assert_eq!(names(&board), vec!["a", "b"]);
    }

    #[test]
    fn test_move_down_swaps_and_selection_follows() {
        let mut board = board_with(&["a", "b", "c"]);
        board.focused_panel_mut().select(0);
        assert!(board.move_down());
        assert_eq!(names(&board), vec!["b", "a", "c"]);
        assert_eq!(board.focused_panel().selected_task().unwrap().name, "a");

        assert!(board.move_up());
        assert_eq!(names(&board), vec!["a", "b", "c"]);
        assert_eq!(board.focused_panel().selected_index(), Some(0));
    }

    #[test]
    fn test_toggle_done_keeps_position() {
        let mut board = board_with(&["a", "b"]);
        board.focused_panel_mut().select(1);
        assert!(board.toggle_done());
        assert_eq!(names(&board), vec!["a", "b"]);
        assert!(board.focused_panel().tasks()[1].done);
    }

    #[test]
    fn test_delete_removes_selected() {
        let mut board = board_with(&["a", "b", "c"]);
        board.focused_panel_mut().select(1);
        let removed = board.delete().unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&board), vec!["a", "c"]);
        assert_eq!(board.focused_panel().selected_task().unwrap().name, "c");
    }

    #[test]
    fn test_operations_on_empty_panel_are_noops() {
        let mut board = Board::new();
        assert!(!board.move_up());
        assert!(!board.move_down());
        assert!(!board.toggle_done());
        assert!(board.delete().is_none());
        board.select_next();
        assert_eq!(board.focused_panel().selected_index(), None);
    }

    #[test]
    fn test_select_task_by_index() {
        let mut board = board_with(&["a", "b", "c"]);
        assert!(board.select_task(2));
        assert_eq!(board.focused_panel().selected_task().unwrap().name, "c");
        assert!(!board.select_task(3));
        assert_eq!(board.focused_panel().selected_index(), Some(2));
    }
}
