use crate::{
    events::{Event, EventHandler},
    keybindings::{resolve_normal_key, KeybindingAction},
    prompt::Prompt,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use weekplan_core::WeekplanResult;
use weekplan_domain::{Command, Planner, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddTask,
    EditTask,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

pub struct App<S: TaskStore> {
    pub planner: Planner<S>,
    pub mode: AppMode,
    pub prompt: Prompt,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl<S: TaskStore> App<S> {
    pub fn new(planner: Planner<S>) -> Self {
        Self {
            planner,
            mode: AppMode::Normal,
            prompt: Prompt::new(),
            status: None,
            should_quit: false,
        }
    }

    /// Save, then stop the event loop. A failed save keeps the app running
    /// with the error on the status line.
    pub fn quit(&mut self) {
        if self.save() {
            self.should_quit = true;
        }
    }

    /// Feed one terminal event to the app. Errors end up on the status line
    /// instead of stopping the loop.
    pub fn on_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if let Err(e) = self.handle_key(key) {
                self.report_error(format!("Error: {}", e));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> WeekplanResult<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        match self.mode {
            AppMode::Normal => match resolve_normal_key(&key) {
                Some(action) => self.apply(action),
                None => Ok(()),
            },
            AppMode::AddTask | AppMode::EditTask => self.handle_prompt_key(key),
            AppMode::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.mode = AppMode::Normal;
                }
                Ok(())
            }
        }
    }

    fn apply(&mut self, action: KeybindingAction) -> WeekplanResult<()> {
        self.status = None;
        match action {
            KeybindingAction::Planner(command) => self.planner.execute(command)?,
            KeybindingAction::NewTask => {
                self.prompt.clear();
                self.mode = AppMode::AddTask;
            }
            KeybindingAction::EditTask => {
                if let Some(task) = self.planner.board().focused_panel().selected_task() {
                    self.prompt.set(task.name.clone());
                    self.mode = AppMode::EditTask;
                }
            }
            KeybindingAction::Save => {
                self.save();
            }
            KeybindingAction::ToggleHelp => self.mode = AppMode::Help,
            KeybindingAction::Quit => self.quit(),
        }
        Ok(())
    }

    fn save(&mut self) -> bool {
        match self.planner.save() {
            Ok(()) => {
                self.status = Some(StatusMessage {
                    text: "Saved".to_string(),
                    is_error: false,
                });
                true
            }
            Err(e) => {
                self.report_error(format!("Save failed: {}", e));
                false
            }
        }
    }

    fn report_error(&mut self, text: String) {
        tracing::error!("{}", text);
        self.status = Some(StatusMessage {
            text,
            is_error: true,
        });
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> WeekplanResult<()> {
        match key.code {
            KeyCode::Enter if self.prompt.is_empty() => {
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                let value = self.prompt.take();
                let command = match self.mode {
                    AppMode::EditTask => Command::Edit(value),
                    _ => Command::Add(value),
                };
                self.mode = AppMode::Normal;
                self.planner.execute(command)?;
            }
            KeyCode::Esc => {
                self.prompt.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.prompt.insert(c)
            }
            KeyCode::Backspace => self.prompt.backspace(),
            KeyCode::Delete => self.prompt.delete(),
            KeyCode::Left => self.prompt.left(),
            KeyCode::Right => self.prompt.right(),
            KeyCode::Home => self.prompt.home(),
            KeyCode::End => self.prompt.end(),
            _ => {}
        }
        Ok(())
    }

    pub async fn run(&mut self) -> WeekplanResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> WeekplanResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.on_event(event),
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
