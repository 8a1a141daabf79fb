use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use weekplan_domain::{Command, Day};

pub struct NormalModeProvider;

impl KeybindingProvider for NormalModeProvider {
    fn get_contexts(&self) -> Vec<KeybindingContext> {
        vec![
            KeybindingContext::new(
                "General",
                vec![
                    Keybinding::new("tab", "next day", "Focus next day"),
                    Keybinding::new("shift+tab", "prev day", "Focus previous day"),
                    Keybinding::new("alt+0", "inbox", "Focus inbox"),
                    Keybinding::new("alt+1..7", "weekday", "Focus weekday"),
                    Keybinding::new("t", "today", "Focus today"),
                    Keybinding::new("j/↓", "down", "Select next task"),
                    Keybinding::new("k/↑", "up", "Select previous task"),
                    Keybinding::new("]", "next week", "Show next week"),
                    Keybinding::new("[", "prev week", "Show previous week"),
                    Keybinding::new("s", "save", "Save"),
                    Keybinding::new("?", "help", "Toggle help"),
                    Keybinding::new("q/ctrl+c", "quit", "Save and quit"),
                ],
            ),
            KeybindingContext::new(
                "Management",
                vec![
                    Keybinding::new("backspace", "delete", "Delete task"),
                    Keybinding::new("space/x", "done", "Complete task"),
                    Keybinding::new("enter", "edit", "Edit task"),
                    Keybinding::new("n", "new", "New task"),
                ],
            ),
            KeybindingContext::new(
                "Movement",
                vec![
                    Keybinding::new("shift+→", "right", "Move task right"),
                    Keybinding::new("shift+←", "left", "Move task left"),
                    Keybinding::new("T", "to today", "Move task to today"),
                    Keybinding::new("I", "to inbox", "Move task to inbox"),
                ],
            ),
            KeybindingContext::new(
                "Sorting",
                vec![
                    Keybinding::new("shift+↑", "up", "Move task up"),
                    Keybinding::new("shift+↓", "down", "Move task down"),
                ],
            ),
        ]
    }

    fn footer_hints(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::new("tab", "next day", "Focus next day"),
            Keybinding::new("shift+tab", "prev day", "Focus previous day"),
            Keybinding::new("enter", "edit task", "Edit task"),
            Keybinding::new("n", "new task", "New task"),
            Keybinding::new("t", "today", "Focus today"),
            Keybinding::new("?", "help", "Toggle help"),
        ]
    }
}

/// Map a key press in normal mode to its action.
pub fn resolve_normal_key(key: &KeyEvent) -> Option<KeybindingAction> {
    use KeybindingAction::{EditTask, NewTask, Planner, Quit, Save, ToggleHelp};

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => Quit,
        KeyCode::Char(c @ '0'..='7') if alt => {
            Planner(Command::SelectTab(Day::new(c as usize - '0' as usize)?))
        }
        KeyCode::Char('q') => Quit,
        KeyCode::Tab => Planner(Command::NextTab),
        KeyCode::BackTab => Planner(Command::PreviousTab),
        KeyCode::Right if shift => Planner(Command::MoveRight),
        KeyCode::Left if shift => Planner(Command::MoveLeft),
        KeyCode::Up if shift => Planner(Command::MoveUp),
        KeyCode::Down if shift => Planner(Command::MoveDown),
        KeyCode::Char('T') => Planner(Command::MoveToToday),
        KeyCode::Char('I') => Planner(Command::MoveToInbox),
        KeyCode::Char('t') => Planner(Command::FocusToday),
        KeyCode::Char('j') | KeyCode::Down => Planner(Command::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Planner(Command::SelectPrevious),
        KeyCode::Char(']') => Planner(Command::NextWeek),
        KeyCode::Char('[') => Planner(Command::PrevWeek),
        KeyCode::Char(' ') | KeyCode::Char('x') => Planner(Command::ToggleDone),
        KeyCode::Backspace => Planner(Command::Delete),
        KeyCode::Enter => EditTask,
        KeyCode::Char('n') => NewTask,
        KeyCode::Char('s') => Save,
        KeyCode::Char('?') => ToggleHelp,
        _ => return None,
    };
    Some(action)
}
