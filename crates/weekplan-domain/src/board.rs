use weekplan_core::InsertionPolicy;

use crate::{day::Day, panel::Panel, scheduler::insertion_index, task::Task};

/// The Inbox plus seven weekday panels, and the panel that has focus.
#[derive(Debug, Clone)]
pub struct Board {
    panels: [Panel; Day::COUNT],
    pub(crate) focus: Day,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            panels: Day::ALL.map(Panel::new),
            focus: Day::INBOX,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the board from a flat task list. Tasks are grouped by day and
    /// ordered by their stored `pos`; ties keep their input order.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.panels[task.day.index()].push_loaded(task);
        }
        for panel in &mut board.panels {
            panel.sort_by_pos();
        }
        tracing::debug!(
            "Built board with {} tasks",
            board.panels.iter().map(Panel::len).sum::<usize>()
        );
        board
    }

    /// Flatten back into a task list, Inbox first, renumbering `pos` per panel.
    pub fn flatten(&self) -> Vec<Task> {
        self.panels
            .iter()
            .flat_map(Panel::tasks_with_positions)
            .collect()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, day: Day) -> &Panel {
        &self.panels[day.index()]
    }

    pub fn panel_mut(&mut self, day: Day) -> &mut Panel {
        &mut self.panels[day.index()]
    }

    pub fn focus(&self) -> Day {
        self.focus
    }

    /// Panel receiving navigation and edit commands.
    pub fn focused_panel(&self) -> &Panel {
        self.panel(self.focus)
    }

    pub fn focused_panel_mut(&mut self) -> &mut Panel {
        let focus = self.focus;
        self.panel_mut(focus)
    }

    /// Tasks across all eight panels.
    pub fn task_count(&self) -> usize {
        self.panels.iter().map(Panel::len).sum()
    }

    /// Add a task named `name` to the focused panel and select it.
    /// Blank names are ignored.
    pub fn add(&mut self, name: &str, policy: InsertionPolicy) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let focus = self.focus;
        let panel = self.panel_mut(focus);
        let index = insertion_index(policy, panel.tasks());
        let landed = panel.insert(index, Task::new(name, focus));
        panel.select(landed);
        true
    }

    /// Rename the selected task of the focused panel in place.
    pub fn edit(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.focused_panel_mut().selected_task_mut() {
            Some(task) => {
                task.rename(name.to_string());
                true
            }
            None => false,
        }
    }

    /// Move the selected task of the focused panel into `to`, placing it at
    /// that panel's insertion index and selecting it there. Moving into the
    /// focused panel itself re-positions the task.
    pub fn move_item(&mut self, to: Day, policy: InsertionPolicy) -> bool {
        let Some(task) = self.focused_panel_mut().remove_selected() else {
            return false;
        };
        let destination = self.panel_mut(to);
        let index = insertion_index(policy, destination.tasks());
        let landed = destination.insert(index, task);
        destination.select(landed);
        true
    }
}
