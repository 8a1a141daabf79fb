use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use weekplan_domain::Day;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "A terminal week planner with an inbox and seven day panels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the task store (or set WEEKPLAN_FILE env var)
    #[arg(long, value_name = "FILE", env = "WEEKPLAN_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the per-user one
    #[arg(long, value_name = "FILE", env = "WEEKPLAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Week to open the planner on or run commands against (1-52)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=52))]
    pub week: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Task operations
    Task(TaskCommand),
    /// Week information
    Week(WeekCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

/// A task addressed by panel and position.
#[derive(Args, Debug, Clone, Copy)]
pub struct TaskTarget {
    /// Panel: 0-7, a weekday name, "inbox" or "today"
    #[arg(long, value_parser = parse_day)]
    pub day: Day,
    /// Zero-based position within the panel
    #[arg(long)]
    pub index: usize,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks, optionally for one panel
    List {
        #[arg(long, value_parser = parse_day)]
        day: Option<Day>,
    },
    /// Add a task (Inbox unless --day is given)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = parse_day)]
        day: Option<Day>,
    },
    /// Rename a task
    Edit {
        #[command(flatten)]
        target: TaskTarget,
        #[arg(long)]
        name: String,
    },
    /// Toggle a task's done flag
    Toggle(TaskTarget),
    /// Delete a task
    Delete(TaskTarget),
    /// Move a task to another panel
    Move {
        #[command(flatten)]
        target: TaskTarget,
        #[arg(long, value_parser = parse_day)]
        to: Day,
    },
    /// Move a task one place up within its panel
    Up(TaskTarget),
    /// Move a task one place down within its panel
    Down(TaskTarget),
}

#[derive(Args)]
pub struct WeekCommand {
    #[command(subcommand)]
    pub action: WeekAction,
}

#[derive(Subcommand)]
pub enum WeekAction {
    /// Panel labels of the selected week (see --week)
    Labels,
}

pub fn parse_day(value: &str) -> Result<Day, String> {
    let lower = value.trim().to_lowercase();
    if let Ok(index) = lower.parse::<usize>() {
        return Day::new(index).ok_or_else(|| format!("day must be 0-7, got {}", index));
    }
    if lower == "today" {
        return Ok(Day::today());
    }
    Day::ALL
        .into_iter()
        .find(|day| {
            let name = day.name().to_lowercase();
            name == lower || (lower.len() >= 3 && name.starts_with(&lower))
        })
        .ok_or_else(|| format!("unknown day '{}'", value))
}
