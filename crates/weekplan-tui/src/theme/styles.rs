use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn today_title() -> Style {
    Style::default()
        .fg(TODAY_TITLE)
        .add_modifier(Modifier::BOLD)
}

pub fn task_text(done: bool, selected: bool) -> Style {
    let mut style = if done {
        Style::default()
            .fg(DONE_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        normal_text()
    };
    if selected {
        style = style.fg(SELECTED_TEXT).add_modifier(Modifier::BOLD);
    }
    style
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
