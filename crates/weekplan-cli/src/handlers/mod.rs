pub mod task;
pub mod week;
