use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct PromptModeProvider {
    title: String,
}

impl PromptModeProvider {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl KeybindingProvider for PromptModeProvider {
    fn get_contexts(&self) -> Vec<KeybindingContext> {
        vec![KeybindingContext::new(
            self.title.clone(),
            vec![
                Keybinding::new("enter", "confirm", "Confirm"),
                Keybinding::new("esc", "cancel", "Cancel"),
                Keybinding::new("←/→", "cursor", "Move cursor"),
                Keybinding::new("home/end", "jump", "Jump to start or end"),
            ],
        )]
    }

    fn footer_hints(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new("enter", "confirm", "Confirm"),
            Keybinding::new("esc", "cancel", "Cancel"),
        ]
    }
}
