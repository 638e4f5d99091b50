// src/commands/stat_cmd/mod.rs
use crate::commands::{Binary, BinaryContext, CommandResult};
use crate::fs::{FileContent, Node};

pub struct StatBinary;

impl Binary for StatBinary {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        if ctx.args.is_empty() {
            return CommandResult::error("stat: missing operand\n".to_string());
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;

        for arg in &ctx.args {
            let path = ctx.env.resolve_path(arg);
            match ctx.fs.resolve(&path) {
                Ok(node) => stdout.push_str(&describe(node, &path.to_string())),
                Err(_) => {
                    stderr.push_str(&format!("stat: cannot stat '{}': No such file or directory\n", arg));
                    exit_code = 1;
                }
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

fn describe(node: &Node, path: &str) -> String {
    let meta = node.metadata();
    let kind = match node {
        Node::Directory { .. } => "directory",
        Node::File { content: FileContent::Binary(_), .. } => "executable",
        Node::File { .. } => "regular file",
    };
    format!(
        "  File: {}\n  Size: {}\t{}\nAccess: ({:04o}/{}{})  Uid: ({:>5}/{:>8})   Gid: ({:>5}/{:>8})\nModify: {}\n",
        path,
        node.size(),
        kind,
        meta.permissions.mode(),
        if node.is_directory() { 'd' } else { '-' },
        meta.permissions,
        meta.owner.user.uid,
        meta.owner.user.name,
        meta.owner.group.gid,
        meta.owner.group.name,
        meta.modified_at.format("%Y-%m-%d %H:%M:%S %z"),
    )
}
