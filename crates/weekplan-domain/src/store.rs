use weekplan_core::WeekplanResult;

use crate::task::Task;

/// Persistent home of the flat task collection.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Read every persisted task. Missing or malformed storage is handled
    /// according to the store's load-failure policy.
    fn load(&self) -> WeekplanResult<Vec<Task>>;

    /// Archive the current contents, then replace them with `tasks`.
    fn save(&self, tasks: &[Task]) -> WeekplanResult<()>;
}
