// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod echo;
pub mod env;
pub mod id_cmd;
pub mod ls;
pub mod pwd;
pub mod registry;
pub mod stat_cmd;
pub mod types;
pub mod which_cmd;
pub mod whoami_cmd;

pub use registry::{create_builtin_registry, register_builtins, BinaryRegistry};
pub use types::{Binary, BinaryContext, CommandResult};

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{TimeZone, Utc};

    use crate::environment::ExecutionEnvironment;
    use crate::fs::{make_directory, make_file, make_root, FileContent, Filesystem, NodeOptions};
    use crate::identity::IdentityRegistry;

    use super::{Binary, BinaryContext, CommandResult};

    fn opts() -> NodeOptions {
        NodeOptions {
            modified_at: Some(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()),
            ..Default::default()
        }
    }

    /// /bin/{ls,cat}  /home/nyx/{notes.txt,.profile,projects/}  /tmp
    pub fn sample() -> (Filesystem, ExecutionEnvironment) {
        let env = ExecutionEnvironment::create(1000, IdentityRegistry::builtin()).unwrap();
        let root_user = env.identities().lookup_user(0).unwrap().clone();
        let as_root = || NodeOptions { owner: Some(root_user.clone()), ..opts() };

        let bin = make_directory(
            &env,
            "bin",
            vec![
                make_file(&env, "ls", FileContent::Binary("ls".into()), as_root().with_permissions("775")).unwrap(),
                make_file(&env, "cat", FileContent::Binary("cat".into()), as_root().with_permissions("775")).unwrap(),
            ],
            as_root(),
        )
        .unwrap();
        let nyx = make_directory(
            &env,
            "nyx",
            vec![
                make_file(&env, "notes.txt", "buy milk\n", opts()).unwrap(),
                make_file(&env, ".profile", "export EDITOR=vi\n", opts()).unwrap(),
                make_directory(&env, "projects", vec![], opts()).unwrap(),
            ],
            opts(),
        )
        .unwrap();
        let home = make_directory(&env, "home", vec![nyx], as_root()).unwrap();
        let tmp = make_directory(&env, "tmp", vec![], as_root().with_permissions("777")).unwrap();
        let root = make_root(&env, vec![bin, home, tmp], as_root()).unwrap();
        (Filesystem::new(root), env)
    }

    pub fn run(binary: &dyn Binary, args: &[&str]) -> CommandResult {
        let (fs, mut env) = sample();
        run_in(binary, args, &fs, &mut env)
    }

    pub fn run_in(
        binary: &dyn Binary,
        args: &[&str],
        fs: &Filesystem,
        env: &mut ExecutionEnvironment,
    ) -> CommandResult {
        binary.run(BinaryContext {
            args: args.iter().map(|s| s.to_string()).collect(),
            env,
            fs,
        })
    }
}
