use weekplan_core::WeekplanResult;

use crate::{
    board::Board, command::Command, day::Day, panel::Panel, scheduler::Scheduler,
    scheduler::Week, store::TaskStore,
};

/// The day-board engine: board state, week bookkeeping, and the store it
/// loads from and saves to. Each command is applied completely before the
/// next one is accepted.
pub struct Planner<S: TaskStore> {
    board: Board,
    scheduler: Scheduler,
    store: S,
    today: Day,
    dirty: bool,
}

impl<S: TaskStore> Planner<S> {
    /// Read every task from `store` and lay them out on a labelled board.
    pub fn load(store: S, scheduler: Scheduler) -> WeekplanResult<Self> {
        let tasks = store.load()?;
        let mut board = Board::from_tasks(tasks);
        scheduler.apply_labels(&mut board);
        tracing::info!(
            "Loaded {} tasks for week {}",
            board.task_count(),
            scheduler.week().number()
        );
        Ok(Self {
            board,
            scheduler,
            store,
            today: Day::today(),
            dirty: false,
        })
    }

    /// Override the weekday used by "today" commands.
    pub fn with_today(mut self, today: Day) -> Self {
        self.today = today;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn panels(&self) -> &[Panel] {
        self.board.panels()
    }

    pub fn focus(&self) -> Day {
        self.board.focus()
    }

    pub fn week(&self) -> Week {
        self.scheduler.week()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> Day {
        self.today
    }

    /// True when tasks changed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add to the focused panel at the insertion index. False for blank names.
    pub fn add(&mut self, name: &str) -> bool {
        let changed = self.board.add(name, self.scheduler.insertion_policy());
        self.mark(changed)
    }

    pub fn edit(&mut self, name: &str) -> bool {
        let changed = self.board.edit(name);
        self.mark(changed)
    }

    pub fn toggle_done(&mut self) -> bool {
        let changed = self.board.toggle_done();
        self.mark(changed)
    }

    pub fn delete(&mut self) -> bool {
        let changed = self.board.delete().is_some();
        self.mark(changed)
    }

    /// Move the selected task into `to`. False when nothing is selected.
    pub fn move_item(&mut self, to: Day) -> bool {
        let changed = self
            .board
            .move_item(to, self.scheduler.insertion_policy());
        self.mark(changed)
    }

    pub fn move_right(&mut self) -> bool {
        match self.board.focus().right() {
            Some(to) => self.move_item(to),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        match self.board.focus().left() {
            Some(to) => self.move_item(to),
            None => false,
        }
    }

    pub fn move_up(&mut self) -> bool {
        let changed = self.board.move_up();
        self.mark(changed)
    }

    pub fn move_down(&mut self) -> bool {
        let changed = self.board.move_down();
        self.mark(changed)
    }

    pub fn next_tab(&mut self) {
        self.board.next_tab();
    }

    pub fn previous_tab(&mut self) {
        self.board.previous_tab();
    }

    pub fn select_tab(&mut self, day: Day) {
        self.board.select_tab(day);
    }

    pub fn focus_today(&mut self) {
        self.board.select_tab(self.today);
    }

    pub fn select_next(&mut self) {
        self.board.select_next();
    }

    pub fn select_previous(&mut self) {
        self.board.select_previous();
    }

    pub fn select_task(&mut self, index: usize) -> bool {
        self.board.select_task(index)
    }

    /// Advance the week and relabel the panels. False at week 52.
    pub fn next_week(&mut self) -> bool {
        let changed = self.scheduler.next_week();
        if changed {
            self.scheduler.apply_labels(&mut self.board);
        }
        changed
    }

    /// Step back a week and relabel the panels. False at week 1.
    pub fn prev_week(&mut self) -> bool {
        let changed = self.scheduler.prev_week();
        if changed {
            self.scheduler.apply_labels(&mut self.board);
        }
        changed
    }

    /// Flatten the board and hand it to the store. Errors are returned
    /// unchanged; the board stays dirty when saving fails.
    pub fn save(&mut self) -> WeekplanResult<()> {
        let tasks = self.board.flatten();
        self.store.save(&tasks)?;
        self.dirty = false;
        tracing::info!("Saved {} tasks", tasks.len());
        Ok(())
    }

    /// Apply one command. Only `Command::Save` can fail.
    pub fn execute(&mut self, command: Command) -> WeekplanResult<()> {
        tracing::debug!("Executing: {}", command.description());
        match command {
            Command::Add(name) => {
                self.add(&name);
            }
            Command::Edit(name) => {
                self.edit(&name);
            }
            Command::ToggleDone => {
                self.toggle_done();
            }
            Command::Delete => {
                self.delete();
            }
            Command::MoveItem(to) => {
                self.move_item(to);
            }
            Command::MoveRight => {
                self.move_right();
            }
            Command::MoveLeft => {
                self.move_left();
            }
            Command::MoveToToday => {
                self.move_item(self.today);
            }
            Command::MoveToInbox => {
                self.move_item(Day::INBOX);
            }
            Command::MoveUp => {
                self.move_up();
            }
            Command::MoveDown => {
                self.move_down();
            }
            Command::NextTab => self.next_tab(),
            Command::PreviousTab => self.previous_tab(),
            Command::SelectTab(day) => self.select_tab(day),
            Command::FocusToday => self.focus_today(),
            Command::SelectNext => self.select_next(),
            Command::SelectPrevious => self.select_previous(),
            Command::NextWeek => {
                self.next_week();
            }
            Command::PrevWeek => {
                self.prev_week();
            }
            Command::Save => self.save()?,
        }
        Ok(())
    }

    fn mark(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }
}
