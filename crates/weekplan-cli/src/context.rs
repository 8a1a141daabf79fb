use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::path::PathBuf;
use weekplan_core::{AppConfig, WeekplanError, WeekplanResult};
use weekplan_domain::{Command, Day, Planner, Scheduler, Task, Week};
use weekplan_persistence::JsonTaskStore;

#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub day: u8,
    pub panel: String,
    pub index: usize,
    pub name: String,
    pub done: bool,
    pub scheduled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelLabel {
    pub day: u8,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    pub week: u32,
    pub reference_year: i32,
    pub panels: Vec<PanelLabel>,
}

/// Week to show: explicit choice, then config, then the current ISO week.
pub fn build_scheduler(config: &AppConfig, week: Option<u32>) -> WeekplanResult<Scheduler> {
    let week = week
        .or(config.week)
        .map(Week::clamped)
        .unwrap_or_else(Week::current);
    let year = config
        .reference_year
        .unwrap_or_else(|| Local::now().year());
    Scheduler::new(week, year, &config.engine)
}

/// Store at `file`, or at `tasks.json` in the configured data directory,
/// which is created on first use.
pub fn open_store(config: &AppConfig, file: Option<PathBuf>) -> WeekplanResult<JsonTaskStore> {
    let path = match file {
        Some(path) => path,
        None => {
            let dir = config.effective_data_dir()?;
            if !dir.exists() {
                std::fs::create_dir_all(&dir)?;
                tracing::info!("Created data directory {}", dir.display());
            }
            config.store_path()?
        }
    };
    Ok(JsonTaskStore::new(path)
        .with_load_failure(config.engine.load_failure)
        .with_max_backups(config.max_backups))
}

pub fn load_planner(
    config: &AppConfig,
    file: Option<PathBuf>,
    week: Option<u32>,
) -> WeekplanResult<Planner<JsonTaskStore>> {
    let store = open_store(config, file)?;
    let scheduler = build_scheduler(config, week)?;
    Planner::load(store, scheduler)
}

pub struct CliContext {
    planner: Planner<JsonTaskStore>,
}

impl CliContext {
    pub fn load(config: &AppConfig, file: Option<PathBuf>, week: Option<u32>) -> WeekplanResult<Self> {
        Ok(Self {
            planner: load_planner(config, file, week)?,
        })
    }

    /// Execute a command, saving right away when it changed any task.
    /// No-ops leave the store and its backups untouched.
    pub fn apply(&mut self, command: Command) -> WeekplanResult<()> {
        self.planner.execute(command)?;
        if self.planner.is_dirty() {
            self.planner.save()?;
        }
        Ok(())
    }

    /// Focus `day` and select the task at `index`.
    pub fn target(&mut self, day: Day, index: usize) -> WeekplanResult<()> {
        self.planner.select_tab(day);
        if !self.planner.select_task(index) {
            return Err(WeekplanError::Validation(format!(
                "no task at index {} on {}",
                index, day
            )));
        }
        Ok(())
    }

    pub fn selected(&self) -> WeekplanResult<TaskView> {
        let panel = self.planner.board().focused_panel();
        match (panel.selected_index(), panel.selected_task()) {
            (Some(index), Some(task)) => Ok(self.view(task, index)),
            _ => Err(WeekplanError::Validation(format!(
                "no task selected on {}",
                panel.day()
            ))),
        }
    }

    pub fn list(&self, day: Option<Day>) -> Vec<TaskView> {
        self.planner
            .panels()
            .iter()
            .filter(|panel| day.map_or(true, |day| panel.day() == day))
            .flat_map(|panel| {
                panel
                    .tasks()
                    .iter()
                    .enumerate()
                    .map(|(index, task)| self.view(task, index))
            })
            .collect()
    }

    pub fn add(&mut self, day: Day, name: &str) -> WeekplanResult<TaskView> {
        if name.trim().is_empty() {
            return Err(WeekplanError::Validation(
                "task name must not be blank".to_string(),
            ));
        }
        self.planner.select_tab(day);
        self.apply(Command::Add(name.to_string()))?;
        self.selected()
    }

    pub fn rename(&mut self, day: Day, index: usize, name: &str) -> WeekplanResult<TaskView> {
        if name.trim().is_empty() {
            return Err(WeekplanError::Validation(
                "task name must not be blank".to_string(),
            ));
        }
        self.target(day, index)?;
        self.apply(Command::Edit(name.to_string()))?;
        self.selected()
    }

    pub fn week(&self) -> WeekView {
        let scheduler = self.planner.scheduler();
        WeekView {
            week: scheduler.week().number(),
            reference_year: scheduler.reference_year(),
            panels: self
                .planner
                .panels()
                .iter()
                .map(|panel| PanelLabel {
                    day: panel.day().into(),
                    label: panel.label().to_string(),
                    date: scheduler.date_of(panel.day()),
                })
                .collect(),
        }
    }

    fn view(&self, task: &Task, index: usize) -> TaskView {
        TaskView {
            day: task.day.into(),
            panel: self.planner.board().panel(task.day).label().to_string(),
            index,
            name: task.name.clone(),
            done: task.done,
            scheduled: task.is_scheduled(),
        }
    }
}
