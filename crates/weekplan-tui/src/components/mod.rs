pub mod panel;
pub mod popup;
pub mod task_item;

pub use panel::*;
pub use popup::*;
pub use task_item::*;
