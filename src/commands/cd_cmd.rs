use tracing::debug;

use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct CdBinary;

impl Binary for CdBinary {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let target = match ctx.args.first().map(String::as_str) {
            None | Some("~") => match ctx.env.get_var("HOME") {
                Some(home) => home.to_string(),
                None => return CommandResult::error("cd: HOME not set\n".to_string()),
            },
            Some("-") => match ctx.env.get_var("OLDPWD") {
                Some(old) => old.to_string(),
                None => return CommandResult::error("cd: OLDPWD not set\n".to_string()),
            },
            Some(dir) => dir.to_string(),
        };
        if ctx.args.len() > 1 {
            return CommandResult::error("cd: too many arguments\n".to_string());
        }

        let path = ctx.env.resolve_path(&target);
        match ctx.fs.resolve(&path) {
            Ok(node) if node.is_directory() => {
                debug!(from = %ctx.env.cwd(), to = %path, "changing directory");
                ctx.env.set_cwd(&path);
                let stdout = if ctx.args.first().map(String::as_str) == Some("-") {
                    format!("{}\n", path)
                } else {
                    String::new()
                };
                CommandResult::success(stdout)
            }
            Ok(_) => CommandResult::error(format!("cd: {}: Not a directory\n", target)),
            Err(_) => CommandResult::error(format!("cd: {}: No such file or directory\n", target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{run, run_in, sample};
    use crate::fs::Path;

    #[test]
    fn test_cd_relative_and_back() {
        let (fs, mut env) = sample();
        assert_eq!(run_in(&CdBinary, &["projects"], &fs, &mut env).exit_code, 0);
        assert_eq!(env.cwd().as_str(), "/home/nyx/projects");

        assert_eq!(run_in(&CdBinary, &["../../.."], &fs, &mut env).exit_code, 0);
        assert_eq!(env.cwd().as_str(), "/");

        let result = run_in(&CdBinary, &["-"], &fs, &mut env);
        assert_eq!(result.stdout, "/home/nyx/projects\n");
        assert_eq!(env.get_var("PWD"), Some("/home/nyx/projects"));
    }

    #[test]
    fn test_cd_home() {
        let (fs, mut env) = sample();
        env.set_cwd(&Path::parse("/tmp"));
        run_in(&CdBinary, &[], &fs, &mut env);
        assert_eq!(env.cwd().as_str(), "/home/nyx");
    }

    #[test]
    fn test_cd_errors() {
        assert_eq!(
            run(&CdBinary, &["notes.txt"]).stderr,
            "cd: notes.txt: Not a directory\n"
        );
        assert_eq!(
            run(&CdBinary, &["/missing"]).stderr,
            "cd: /missing: No such file or directory\n"
        );
        assert_eq!(run(&CdBinary, &["a", "b"]).exit_code, 1);
    }
}
