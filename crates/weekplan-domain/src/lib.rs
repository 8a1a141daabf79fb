pub mod board;
pub mod command;
pub mod day;
pub mod navigator;
pub mod panel;
pub mod planner;
pub mod scheduler;
pub mod store;
pub mod task;

pub use board::Board;
pub use command::Command;
pub use day::Day;
pub use panel::Panel;
pub use planner::Planner;
pub use scheduler::{insertion_index, is_scheduled, Scheduler, Week};
pub use store::TaskStore;
pub use task::Task;
