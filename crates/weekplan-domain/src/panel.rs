use weekplan_core::SelectionState;

use crate::{day::Day, task::Task};

/// Ordered task list for one day, with its label and selection cursor.
#[derive(Debug, Clone)]
pub struct Panel {
    day: Day,
    label: String,
    tasks: Vec<Task>,
    selection: SelectionState,
}

impl Panel {
    /// Empty panel labelled with the bare day name until a scheduler relabels it.
    pub fn new(day: Day) -> Self {
        Self {
            day,
            label: day.name().to_string(),
            tasks: Vec::new(),
            selection: SelectionState::new(),
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the header text, e.g. after a week change.
    pub fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `None` only while the panel is empty.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.get(idx))
    }

    pub fn selected_task_mut(&mut self) -> Option<&mut Task> {
        self.selection.get().and_then(|idx| self.tasks.get_mut(idx))
    }

    /// Select `index`, clamped to the last task.
    pub fn select(&mut self, index: usize) {
        self.selection.select(index, self.tasks.len());
    }

    /// Move the cursor down, stopping at the last task.
    pub fn select_next(&mut self) {
        self.selection.next(self.tasks.len());
    }

    /// Move the cursor up, stopping at the first task.
    pub fn select_prev(&mut self) {
        self.selection.prev(self.tasks.len());
    }

    /// Insert at `index` (clamped to the end), taking ownership of the task's day.
    /// An existing selection keeps pointing at the same task. Returns the index
    /// the task landed at.
    pub fn insert(&mut self, index: usize, mut task: Task) -> usize {
        let index = index.min(self.tasks.len());
        task.day = self.day;
        self.tasks.insert(index, task);
        match self.selection.get() {
            Some(selected) if index <= selected => {
                self.selection.select(selected + 1, self.tasks.len())
            }
            _ => self.selection.clamp(self.tasks.len()),
        }
        index
    }

    pub(crate) fn push_loaded(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn sort_by_pos(&mut self) {
        self.tasks.sort_by_key(|task| task.pos);
        self.selection.clamp(self.tasks.len());
    }

    pub fn remove_selected(&mut self) -> Option<Task> {
        let idx = self.selection.get()?;
        if idx >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(idx);
        self.selection.clamp(self.tasks.len());
        Some(task)
    }

    /// Swap the selected task with the one above (`up`) or below it.
    /// The selection follows the task. Returns false at the panel edge.
    pub(crate) fn shift_selected(&mut self, up: bool) -> bool {
        let Some(idx) = self.selection.get() else {
            return false;
        };
        let target = if up {
            match idx.checked_sub(1) {
                Some(target) => target,
                None => return false,
            }
        } else {
            idx + 1
        };
        if target >= self.tasks.len() {
            return false;
        }
        self.tasks.swap(idx, target);
        self.selection.select(target, self.tasks.len());
        true
    }

    pub(crate) fn tasks_with_positions(&self) -> impl Iterator<Item = Task> + '_ {
        self.tasks.iter().enumerate().map(|(pos, task)| Task {
            pos: pos as i64,
            ..task.clone()
        })
    }
}
