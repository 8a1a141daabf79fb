mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;
use weekplan_core::AppConfig;
use weekplan_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("WEEKPLAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    match cli.command {
        None => {
            let planner = context::load_planner(&config, cli.file, cli.week)?;
            App::new(planner).run().await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "weekplan", &mut std::io::stdout());
        }
        Some(command) => {
            if let Err(e) = run_command(&config, cli.file, cli.week, command) {
                output::output_error(&format!("{:#}", e));
            }
        }
    }

    Ok(())
}

fn run_command(
    config: &AppConfig,
    file: Option<PathBuf>,
    week: Option<u32>,
    command: Commands,
) -> anyhow::Result<()> {
    let mut ctx = CliContext::load(config, file, week)?;

    match command {
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action)?,
        Commands::Week(week_cmd) => handlers::week::handle(&ctx, week_cmd.action)?,
        Commands::Completions { .. } => {}
    }
    Ok(())
}
