use crate::commands::{Binary, BinaryContext, CommandResult};
use crate::environment::DEFAULT_PATH;
use crate::interpreter::command_resolution::{find_in_path, split_path};

pub struct WhichBinary;

const HELP: &str = "which - locate a command

Usage: which [-as] program ...

Options:
  -a         List all instances of executables found
  -s         No output, just return 0 if found, 1 if not
  --help     display this help and exit";

impl Binary for WhichBinary {
    fn name(&self) -> &'static str {
        "which"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let mut show_all = false;
        let mut silent = false;
        let mut names = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "--help" => return CommandResult::success(format!("{}\n", HELP)),
                s if s.starts_with('-') => {
                    for c in s.chars().skip(1) {
                        match c {
                            'a' => show_all = true,
                            's' => silent = true,
                            _ => {}
                        }
                    }
                }
                _ => names.push(arg.as_str()),
            }
        }

        if names.is_empty() {
            return CommandResult::with_exit_code(String::new(), String::new(), 1);
        }

        let path_env = ctx.env.get_var("PATH").unwrap_or(DEFAULT_PATH);
        let dirs = split_path(path_env);

        let mut stdout = String::new();
        let mut all_found = true;

        for name in names {
            let hits = find_in_path(ctx.fs, &dirs, name);
            if hits.is_empty() {
                all_found = false;
                continue;
            }
            let shown = if show_all { hits.len() } else { 1 };
            if !silent {
                for (path, _) in hits.iter().take(shown) {
                    stdout.push_str(&format!("{}\n", path));
                }
            }
        }

        CommandResult::with_exit_code(stdout, String::new(), if all_found { 0 } else { 1 })
    }
}
