pub mod app;
pub mod components;
pub mod events;
pub mod keybindings;
pub mod prompt;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
