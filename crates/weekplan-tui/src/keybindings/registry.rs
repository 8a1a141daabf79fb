use super::{KeybindingProvider, NormalModeProvider, PromptModeProvider};
use crate::app::AppMode;

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(mode: AppMode) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Normal | AppMode::Help => Box::new(NormalModeProvider),
            AppMode::AddTask => Box::new(PromptModeProvider::new("New Task")),
            AppMode::EditTask => Box::new(PromptModeProvider::new("Edit Task")),
        }
    }
}
