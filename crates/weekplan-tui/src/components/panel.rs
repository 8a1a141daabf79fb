use crate::components::task_line;
use crate::theme::{focused_border, today_title, unfocused_border};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use weekplan_domain::Panel;

pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub is_active: bool,
    pub is_today: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_active: false,
            is_today: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_active {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn block(&self) -> Block<'a> {
        let title_style = if self.is_today {
            today_title()
        } else {
            self.border_style()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Line::from(Span::styled(format!(" {} ", self.title), title_style)))
    }
}

/// First visible row so that the selected row stays on screen.
pub fn scroll_offset(selected: Option<usize>, visible_rows: usize) -> usize {
    match selected {
        Some(index) if visible_rows > 0 => (index + 1).saturating_sub(visible_rows),
        _ => 0,
    }
}

pub fn render_day_panel(frame: &mut Frame, area: Rect, panel: &Panel, config: &PanelConfig) {
    let width = area.width.saturating_sub(2) as usize;
    let rows = area.height.saturating_sub(2) as usize;
    let selected = panel.selected_index();

    let lines: Vec<Line> = panel
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| task_line(task, config.is_active && panel.is_selected(index), width))
        .collect();

    let offset = if config.is_active {
        scroll_offset(selected, rows)
    } else {
        0
    };

    let widget = Paragraph::new(lines)
        .block(config.block())
        .scroll((offset as u16, 0));
    frame.render_widget(widget, area);
}
