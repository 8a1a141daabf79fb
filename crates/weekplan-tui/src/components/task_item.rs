use crate::theme::task_text;
use ratatui::text::{Line, Span};
use weekplan_domain::Task;

pub const POINTER: &str = "> ";
pub const DONE_MARK: &str = "X ";
const INDENT: &str = "  ";
const ELLIPSIS: &str = "...";

/// Task name fitted into a row `width` columns wide, leaving room for the
/// selection pointer. Done tasks carry an `X ` mark.
pub fn display_name(task: &Task, width: usize) -> String {
    let mut room = width.saturating_sub(POINTER.len());
    if task.done {
        room = room.saturating_sub(DONE_MARK.len());
    }

    let name = truncate(&task.name, room);
    if task.done {
        format!("{DONE_MARK}{name}")
    } else {
        name
    }
}

fn truncate(name: &str, room: usize) -> String {
    if name.chars().count() <= room {
        return name.to_string();
    }
    let keep = room.saturating_sub(ELLIPSIS.len());
    let mut cut: String = name.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// One list row. The pointer is drawn only for the selected task of the
/// active panel.
pub fn task_line(task: &Task, is_selected: bool, width: usize) -> Line<'static> {
    let prefix = if is_selected { POINTER } else { INDENT };
    Line::from(Span::styled(
        format!("{prefix}{}", display_name(task, width)),
        task_text(task.done, is_selected),
    ))
}
