use crate::commands::{Binary, BinaryContext, CommandResult};

pub struct IdBinary;

const HELP: &str = "Usage: id [OPTION]... [USER]

Print user and group information for USER, or the current user.

Options:
  -u         print only the effective user ID
  -g         print only the effective group ID
  -n         print a name instead of a number, with -u or -g
  --help     display this help and exit";

impl Binary for IdBinary {
    fn name(&self) -> &'static str {
        "id"
    }

    fn run(&self, ctx: BinaryContext<'_>) -> CommandResult {
        let mut only_user = false;
        let mut only_group = false;
        let mut names = false;
        let mut target: Option<&str> = None;

        for arg in &ctx.args {
            match arg.as_str() {
                "--help" => return CommandResult::success(format!("{}\n", HELP)),
                "-u" => only_user = true,
                "-g" => only_group = true,
                "-n" => names = true,
                "-un" | "-nu" => { only_user = true; names = true; }
                "-gn" | "-ng" => { only_group = true; names = true; }
                s if s.starts_with('-') => {
                    return CommandResult::error(format!("id: invalid option '{}'\n", s));
                }
                s => target = Some(s),
            }
        }

        let identities = ctx.env.identities();
        let user = match target {
            None => ctx.env.user(),
            Some(name) => match identities.user_by_name(name) {
                Some(u) => u,
                None => return CommandResult::error(format!("id: '{}': no such user\n", name)),
            },
        };
        let group = match identities.group_of(user) {
            Ok(g) => g,
            Err(e) => return CommandResult::error(format!("id: {}\n", e)),
        };

        if only_user {
            let out = if names { user.name.clone() } else { user.uid.to_string() };
            return CommandResult::success(format!("{}\n", out));
        }
        if only_group {
            let out = if names { group.name.clone() } else { group.gid.to_string() };
            return CommandResult::success(format!("{}\n", out));
        }

        let groups: Vec<String> = identities
            .groups_of(user)
            .iter()
            .map(|g| format!("{}({})", g.gid, g.name))
            .collect();
        CommandResult::success(format!(
            "uid={}({}) gid={}({}) groups={}\n",
            user.uid,
            user.name,
            group.gid,
            group.name,
            groups.join(",")
        ))
    }
}
