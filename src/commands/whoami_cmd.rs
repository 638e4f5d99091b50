use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct WhoamiBinary;

impl Binary for WhoamiBinary {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.env.user().name))
    }
}
