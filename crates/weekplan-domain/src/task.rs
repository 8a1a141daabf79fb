use serde::{Deserialize, Serialize};

use crate::{day::Day, scheduler};

/// One planner entry as stored in `tasks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub day: Day,
    #[serde(default)]
    pub done: bool,
    /// Order hint within the day. Only meaningful on disk; rewritten on every save.
    #[serde(default)]
    pub pos: i64,
}

impl Task {
    /// Open task with position 0; the board decides where it lands.
    pub fn new(name: impl Into<String>, day: Day) -> Self {
        Self {
            name: name.into(),
            day,
            done: false,
            pos: 0,
        }
    }

    /// Whether the name starts with an `HH:MM` time.
    pub fn is_scheduled(&self) -> bool {
        scheduler::is_scheduled(&self.name)
    }

    pub fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let task: Task = serde_json::from_str(r#"{"name":"water plants"}"#).unwrap();
        assert_eq!(task.day, Day::INBOX);
        assert!(!task.done);
        assert_eq!(task.pos, 0);
    }

    #[test]
    fn test_out_of_range_day_is_rejected() {
        let result = serde_json::from_str::<Task>(r#"{"name":"x","day":12,"done":false,"pos":0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_toggle_done_flips() {
        let mut task = Task::new("call mum", Day::MONDAY);
        task.toggle_done();
        assert!(task.done);
        task.toggle_done();
        assert!(!task.done);
    }
}
