// src/commands/env/mod.rs
use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct EnvBinary;

impl Binary for EnvBinary {
    fn name(&self) -> &'static str {
        "env"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let args = &ctx.args;

        if args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: env [OPTION]... [NAME=VALUE]...\n\n\
                 Print the session environment, or set variables in it.\n\n\
                 Options:\n\
                   -u NAME, --unset=NAME     remove NAME from the environment\n\
                       --help                display this help and exit\n".to_string()
            );
        }

        let mut unset_vars: Vec<String> = Vec::new();
        let mut set_vars: Vec<(String, String)> = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            if arg == "-u" && i + 1 < args.len() {
                i += 1;
                unset_vars.push(args[i].clone());
            } else if let Some(name) = arg.strip_prefix("--unset=") {
                unset_vars.push(name.to_string());
            } else if arg.starts_with('-') {
                return CommandResult::error(format!("env: invalid option '{}'\n", arg));
            } else if let Some((name, value)) = arg.split_once('=') {
                set_vars.push((name.to_string(), value.to_string()));
            } else {
                return CommandResult::with_exit_code(
                    String::new(),
                    format!("env: '{}': running programs is not supported\n", arg),
                    127,
                );
            }
            i += 1;
        }

        // Changes persist in the session
        for name in &unset_vars {
            ctx.env.unset_var(name);
        }
        for (name, value) in &set_vars {
            ctx.env.set_var(name, value);
        }

        let stdout: String = ctx
            .env
            .variables()
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        CommandResult::success(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{run, run_in, sample};

    #[test]
    fn test_env_lists_in_order() {
        let result = run(&EnvBinary, &[]);
        assert!(result.stdout.starts_with("HOME=/home/nyx\nPWD=/home/nyx\nTMPDIR=/tmp\n"));
        assert!(result.stdout.contains("PATH=/bin\n"));
    }

    #[test]
    fn test_env_set_and_unset() {
        let (fs, mut env) = sample();
        let result = run_in(&EnvBinary, &["-u", "TMPDIR", "EDITOR=vi"], &fs, &mut env);
        assert!(!result.stdout.contains("TMPDIR="));
        assert!(result.stdout.ends_with("EDITOR=vi\n"));
        assert_eq!(env.get_var("EDITOR"), Some("vi"));
        assert_eq!(env.get_var("TMPDIR"), None);
    }

    #[test]
    fn test_env_rejects_commands() {
        assert_eq!(run(&EnvBinary, &["ls"]).exit_code, 127);
        assert_eq!(run(&EnvBinary, &["-z"]).exit_code, 1);
    }
}
