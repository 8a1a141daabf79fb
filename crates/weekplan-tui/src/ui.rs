use crate::app::{App, AppMode};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weekplan_domain::{Day, TaskStore};

const PANELS_PER_ROW: usize = 4;

pub fn render<S: TaskStore>(app: &App<S>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_board(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.mode == AppMode::Help {
        render_help_popup(app, frame);
    }
}

/// Two rows of four panels: Inbox..Wednesday, then Thursday..Sunday.
fn render_board<S: TaskStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let planner = &app.planner;
    let focus = planner.focus();
    let today = planner.scheduler().is_current_week().then(|| planner.today());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in Day::ALL.chunks(PANELS_PER_ROW).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, PANELS_PER_ROW as u32); PANELS_PER_ROW])
            .split(rows[row_index]);

        for (cell, &day) in cells.iter().zip(row) {
            let panel = planner.board().panel(day);
            let config = PanelConfig::new(panel.label())
                .active(day == focus)
                .today(Some(day) == today);
            render_day_panel(frame, *cell, panel, &config);
        }
    }
}

fn render_footer<S: TaskStore>(app: &App<S>, frame: &mut Frame, area: Rect) {
    match app.mode {
        AppMode::AddTask | AppMode::EditTask => {
            let label = if app.mode == AppMode::AddTask {
                " New task: "
            } else {
                " Edit task: "
            };
            let line = Line::from(vec![
                Span::styled(label, highlight_text()),
                Span::styled(app.prompt.value().to_string(), normal_text()),
            ]);
            frame.render_widget(Paragraph::new(line), area);

            let cursor_x = area.x + label.chars().count() as u16 + app.prompt.cursor() as u16;
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(1)), area.y));
        }
        AppMode::Normal | AppMode::Help => {
            let line = match &app.status {
                Some(status) => {
                    let style = if status.is_error {
                        error_text()
                    } else {
                        highlight_text()
                    };
                    Line::from(Span::styled(format!(" {}", status.text), style))
                }
                None => hint_line(app),
            };
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn hint_line<S: TaskStore>(app: &App<S>) -> Line<'static> {
    let hints = KeybindingRegistry::get_provider(app.mode)
        .footer_hints()
        .iter()
        .map(|binding| format!("{}: {}", binding.key, binding.short_description))
        .collect::<Vec<_>>()
        .join(" • ");

    let mut spans = vec![Span::styled(format!(" {}", hints), label_text())];
    if app.planner.is_dirty() {
        spans.push(Span::styled("  [modified]", highlight_text()));
    }
    Line::from(spans)
}

fn render_help_popup<S: TaskStore>(app: &App<S>, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Help - Keybindings", 70, 80);
    let area = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0)])
        .split(inner)[0];

    let mut lines = Vec::new();
    for context in KeybindingRegistry::get_provider(app.mode).get_contexts() {
        lines.push(Line::from(Span::styled(
            context.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for binding in &context.bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", binding.key), highlight_text()),
                Span::styled(binding.description.clone(), normal_text()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("esc/?: close help", label_text())));

    frame.render_widget(Paragraph::new(lines), area);
}
