pub mod config;
pub mod error;
pub mod result;
pub mod selection;

pub use config::{AppConfig, EngineConfig, InsertionPolicy, LoadFailurePolicy};
pub use error::WeekplanError;
pub use result::WeekplanResult;
pub use selection::SelectionState;
