// src/commands/ls/mod.rs
use chrono::{DateTime, Utc};

use crate::commands::{Binary, BinaryContext, CommandResult};
use crate::fs::Node;

pub struct LsBinary;

fn format_mode(node: &Node) -> String {
    let file_type = if node.is_directory() { 'd' } else { '-' };
    format!("{}{}", file_type, node.metadata().permissions)
}

fn format_time(mtime: DateTime<Utc>) -> String {
    let six_months_ago = Utc::now() - chrono::Duration::days(180);
    if mtime > six_months_ago {
        mtime.format("%b %e %H:%M").to_string()
    } else {
        mtime.format("%b %e  %Y").to_string()
    }
}

fn format_long(node: &Node, display_name: &str) -> String {
    let meta = node.metadata();
    format!(
        "{} {} {} {:>5} {} {}\n",
        format_mode(node),
        meta.owner.user.name,
        meta.owner.group.name,
        node.size(),
        format_time(meta.modified_at),
        display_name
    )
}

impl Binary for LsBinary {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: ls [OPTION]... [FILE]...\n\n\
                 List directory contents in creation order.\n\n\
                 Options:\n\
                   -a, --all          do not ignore entries starting with .\n\
                   -l                 use a long listing format\n\
                   -r, --reverse      reverse order while listing\n\
                   -d, --directory    list directories themselves, not their contents\n\
                       --help         display this help and exit\n".to_string()
            );
        }

        let mut show_all = false;
        let mut long_format = false;
        let mut reverse = false;
        let mut list_dir_itself = false;
        let mut paths: Vec<&str> = Vec::new();

        for arg in &ctx.args {
            match arg.as_str() {
                "--all" => show_all = true,
                "--reverse" => reverse = true,
                "--directory" => list_dir_itself = true,
                s if s.starts_with("--") => {
                    return CommandResult::with_exit_code(
                        String::new(),
                        format!("ls: unrecognized option '{}'\n", s),
                        2,
                    );
                }
                s if s.starts_with('-') && s.len() > 1 => {
                    for c in s.chars().skip(1) {
                        match c {
                            'a' => show_all = true,
                            'l' => long_format = true,
                            'r' => reverse = true,
                            'd' => list_dir_itself = true,
                            _ => {
                                return CommandResult::with_exit_code(
                                    String::new(),
                                    format!("ls: invalid option -- '{}'\n", c),
                                    2,
                                );
                            }
                        }
                    }
                }
                s => paths.push(s),
            }
        }

        if paths.is_empty() {
            paths.push(".");
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;
        let show_path_header = paths.len() > 1;

        for (idx, path) in paths.iter().enumerate() {
            let node = match ctx.fs.resolve(&ctx.env.resolve_path(path)) {
                Ok(n) => n,
                Err(_) => {
                    stderr.push_str(&format!("ls: cannot access '{}': No such file or directory\n", path));
                    exit_code = 2;
                    continue;
                }
            };

            if node.is_file() || list_dir_itself {
                if long_format {
                    stdout.push_str(&format_long(node, path));
                } else {
                    stdout.push_str(&format!("{}\n", path));
                }
                continue;
            }

            if show_path_header {
                if idx > 0 {
                    stdout.push('\n');
                }
                stdout.push_str(&format!("{}:\n", path));
            }

            let mut entries: Vec<&Node> = node
                .children()
                .iter()
                .filter(|c| show_all || !c.name().is_some_and(|n| n.starts_with('.')))
                .collect();
            if reverse {
                entries.reverse();
            }

            for entry in entries {
                let name = entry.name().unwrap_or_default();
                if long_format {
                    stdout.push_str(&format_long(entry, name));
                } else {
                    stdout.push_str(&format!("{}\n", name));
                }
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::run;

    #[test]
    fn test_ls_cwd_in_insertion_order() {
        let result = run(&LsBinary, &[]);
        assert_eq!(result.stdout, "notes.txt\nprojects\n");
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn test_ls_all_and_reverse() {
        assert_eq!(run(&LsBinary, &["-a"]).stdout, "notes.txt\n.profile\nprojects\n");
        assert_eq!(run(&LsBinary, &["-r", "/"]).stdout, "tmp\nhome\nbin\n");
    }

    #[test]
    fn test_ls_long() {
        let result = run(&LsBinary, &["-l", "/bin"]);
        assert_eq!(
            result.stdout,
            "-rwxrwxr-x root root     2 Mar  9  2024 ls\n\
             -rwxrwxr-x root root     3 Mar  9  2024 cat\n"
        );
    }

    #[test]
    fn test_ls_long_directory_itself() {
        let result = run(&LsBinary, &["-l", "-d", "/tmp"]);
        assert_eq!(result.stdout, "drwxrwxrwx root root     0 Mar  9  2024 /tmp\n");
    }

    #[test]
    fn test_ls_file_and_missing() {
        let result = run(&LsBinary, &["notes.txt", "nope"]);
        assert_eq!(result.stdout, "notes.txt\n");
        assert_eq!(result.stderr, "ls: cannot access 'nope': No such file or directory\n");
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn test_ls_multiple_directories() {
        let result = run(&LsBinary, &["/tmp", "/bin"]);
        assert_eq!(result.stdout, "/tmp:\n\n/bin:\nls\ncat\n");
    }

    #[test]
    fn test_ls_combined_flags() {
        assert_eq!(run(&LsBinary, &["-lr", "/bin"]).stdout, run(&LsBinary, &["-l", "-r", "/bin"]).stdout);
        assert_eq!(
            run(&LsBinary, &["-lad", "/tmp"]).stdout,
            "drwxrwxrwx root root     0 Mar  9  2024 /tmp\n"
        );
        assert_eq!(run(&LsBinary, &["-ar"]).stdout, "projects\n.profile\nnotes.txt\n");
    }

    #[test]
    fn test_ls_invalid_option() {
        let result = run(&LsBinary, &["-lz"]);
        assert_eq!(result.stderr, "ls: invalid option -- 'z'\n");
        assert_eq!(result.exit_code, 2);
        assert_eq!(run(&LsBinary, &["--bogus"]).stderr, "ls: unrecognized option '--bogus'\n");
    }
}
