use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output;
use weekplan_domain::{Command, Day};

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::List { day } => {
            output::output_list(ctx.list(day))?;
        }
        TaskAction::Add { name, day } => {
            let task = ctx.add(day.unwrap_or(Day::INBOX), &name)?;
            output::output_success(&task)?;
        }
        TaskAction::Edit { target, name } => {
            let task = ctx.rename(target.day, target.index, &name)?;
            output::output_success(&task)?;
        }
        TaskAction::Toggle(target) => {
            ctx.target(target.day, target.index)?;
            ctx.apply(Command::ToggleDone)?;
            output::output_success(&ctx.selected()?)?;
        }
        TaskAction::Delete(target) => {
            ctx.target(target.day, target.index)?;
            let task = ctx.selected()?;
            ctx.apply(Command::Delete)?;
            output::output_success(serde_json::json!({ "deleted": task }))?;
        }
        TaskAction::Move { target, to } => {
            ctx.target(target.day, target.index)?;
            ctx.apply(Command::MoveItem(to))?;
            output::output_list(ctx.list(Some(to)))?;
        }
        TaskAction::Up(target) => {
            ctx.target(target.day, target.index)?;
            ctx.apply(Command::MoveUp)?;
            output::output_success(&ctx.selected()?)?;
        }
        TaskAction::Down(target) => {
            ctx.target(target.day, target.index)?;
            ctx.apply(Command::MoveDown)?;
            output::output_success(&ctx.selected()?)?;
        }
    }
    Ok(())
}
