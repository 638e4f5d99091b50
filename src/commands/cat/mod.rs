// src/commands/cat/mod.rs
use crate::commands::{Binary, BinaryContext, CommandResult};
use crate::fs::{FileContent, Node};

pub struct CatBinary;

impl Binary for CatBinary {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let args = &ctx.args;

        if args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: cat [OPTION]... FILE...\n\n\
                 Concatenate FILE(s) to standard output.\n\n\
                 Options:\n\
                   -n, --number     number all output lines\n\
                       --help       display this help and exit\n".to_string()
            );
        }

        let mut show_line_numbers = false;
        let mut files: Vec<&String> = Vec::new();

        for arg in args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                s if s.starts_with('-') && s.len() > 1 => {
                    return CommandResult::error(format!("cat: invalid option -- '{}'\n", s.trim_start_matches('-')));
                }
                _ => files.push(arg),
            }
        }

        if files.is_empty() {
            return CommandResult::error("cat: missing operand\n".to_string());
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut line_number = 1;

        for file in files {
            let path = ctx.env.resolve_path(file);
            let content = match ctx.fs.resolve(&path) {
                Ok(Node::File { content: FileContent::Text(text), .. }) => text,
                Ok(Node::File { content: FileContent::Binary(id), .. }) => {
                    // What a real cat would dump as ELF noise
                    stdout.push_str(&format!("#!binary {}\n", id));
                    continue;
                }
                Ok(Node::Directory { .. }) => {
                    stderr.push_str(&format!("cat: {}: Is a directory\n", file));
                    exit_code = 1;
                    continue;
                }
                Err(_) => {
                    stderr.push_str(&format!("cat: {}: No such file or directory\n", file));
                    exit_code = 1;
                    continue;
                }
            };

            if show_line_numbers {
                let (numbered, next_line) = add_line_numbers(content, line_number);
                stdout.push_str(&numbered);
                line_number = next_line;
            } else {
                stdout.push_str(content);
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

fn add_line_numbers(content: &str, start_line: usize) -> (String, usize) {
    let mut out = String::new();
    let mut line = start_line;
    for chunk in content.split_inclusive('\n') {
        out.push_str(&format!("{:>6}\t{}", line, chunk));
        line += 1;
    }
    (out, line)
}
