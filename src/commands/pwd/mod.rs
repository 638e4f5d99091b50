// src/commands/pwd/mod.rs
use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct PwdBinary;

impl Binary for PwdBinary {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        // No symlinks here, so -L and -P agree; arguments are ignored.
        CommandResult::success(format!("{}\n", ctx.env.cwd()))
    }
}
