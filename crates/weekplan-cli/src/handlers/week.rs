use crate::cli::WeekAction;
use crate::context::CliContext;
use crate::output;

pub fn handle(ctx: &CliContext, action: WeekAction) -> anyhow::Result<()> {
    match action {
        WeekAction::Labels => output::output_success(ctx.week())?,
    }
    Ok(())
}
