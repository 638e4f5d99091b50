// src/commands/echo/mod.rs
use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct EchoBinary;

impl Binary for EchoBinary {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let args = &ctx.args;
        let mut no_newline = false;
        let mut interpret_escapes = false;
        let mut start_index = 0;

        while start_index < args.len() {
            match args[start_index].as_str() {
                "-n" => no_newline = true,
                "-e" => interpret_escapes = true,
                "-E" => interpret_escapes = false,
                "-ne" | "-en" => {
                    no_newline = true;
                    interpret_escapes = true;
                }
                _ => break,
            }
            start_index += 1;
        }

        let mut output = args[start_index..].join(" ");

        if interpret_escapes {
            let (expanded, stop) = process_escapes(&output);
            output = expanded;
            // \c: stop and drop the newline
            if stop {
                return CommandResult::success(output);
            }
        }

        if !no_newline {
            output.push('\n');
        }

        CommandResult::success(output)
    }
}

/// Expand the common backslash escapes. The flag is set when `\c` cut the
/// output short.
fn process_escapes(input: &str) -> (String, bool) {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('e') | Some('E') => result.push('\x1b'),
            Some('c') => return (result, true),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    (result, false)
}
