// src/commands/types.rs
use serde::Serialize;

use crate::environment::ExecutionEnvironment;
use crate::fs::Filesystem;

/// Output of one binary invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code }
    }
}

/// What a binary gets to work with
pub struct BinaryContext<'a> {
    /// Arguments after the command name
    pub args: Vec<String>,
    pub env: &'a mut ExecutionEnvironment,
    pub fs: &'a Filesystem,
}

/// A callable installed under an id in the binary registry. File nodes
/// whose content is `FileContent::Binary(id)` dispatch to it.
pub trait Binary: Send + Sync {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult;
}
