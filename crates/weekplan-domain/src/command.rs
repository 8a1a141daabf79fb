use crate::day::Day;

/// A discrete user intent applied to a [`crate::Planner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Edit(String),
    ToggleDone,
    Delete,
    MoveItem(Day),
    MoveRight,
    MoveLeft,
    MoveToToday,
    MoveToInbox,
    MoveUp,
    MoveDown,
    NextTab,
    PreviousTab,
    SelectTab(Day),
    FocusToday,
    SelectNext,
    SelectPrevious,
    NextWeek,
    PrevWeek,
    Save,
}

impl Command {
    /// One-line summary for debug logs.
    pub fn description(&self) -> String {
        match self {
            Command::Add(name) => format!("Add task: '{}'", name),
            Command::Edit(name) => format!("Rename task to '{}'", name),
            Command::ToggleDone => "Toggle done".to_string(),
            Command::Delete => "Delete task".to_string(),
            Command::MoveItem(day) => format!("Move task to {}", day),
            Command::MoveRight => "Move task to next day".to_string(),
            Command::MoveLeft => "Move task to previous day".to_string(),
            Command::MoveToToday => "Move task to today".to_string(),
            Command::MoveToInbox => "Move task to inbox".to_string(),
            Command::MoveUp => "Move task up".to_string(),
            Command::MoveDown => "Move task down".to_string(),
            Command::NextTab => "Focus next day".to_string(),
            Command::PreviousTab => "Focus previous day".to_string(),
            Command::SelectTab(day) => format!("Focus {}", day),
            Command::FocusToday => "Focus today".to_string(),
            Command::SelectNext => "Select next task".to_string(),
            Command::SelectPrevious => "Select previous task".to_string(),
            Command::NextWeek => "Next week".to_string(),
            Command::PrevWeek => "Previous week".to_string(),
            Command::Save => "Save".to_string(),
        }
    }
}
