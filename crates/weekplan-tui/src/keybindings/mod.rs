pub mod normal_mode;
pub mod prompt_mode;
pub mod registry;

pub use normal_mode::{resolve_normal_key, NormalModeProvider};
pub use prompt_mode::PromptModeProvider;
pub use registry::KeybindingRegistry;

use weekplan_domain::Command;

/// What a key press in normal mode asks for. Planner commands pass straight
/// through; the rest are handled by the app itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeybindingAction {
    Planner(Command),
    NewTask,
    EditTask,
    Save,
    ToggleHelp,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub description: String,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }
}

pub trait KeybindingProvider {
    /// Grouped bindings shown in the help popup.
    fn get_contexts(&self) -> Vec<KeybindingContext>;

    /// The few bindings worth showing in the footer.
    fn footer_hints(&self) -> Vec<Keybinding>;
}
