//! Shell Session
//!
//! Main entry point for a terminal session. Ties together identities, the
//! execution environment, the node tree and the dispatcher.

use thiserror::Error;
use tracing::debug;

use crate::commands::{create_builtin_registry, BinaryRegistry, CommandResult};
use crate::config::{ConfigError, ShellConfig};
use crate::environment::ExecutionEnvironment;
use crate::fs::{
    make_directory, make_file, make_root, FileContent, Filesystem, FsError, Node, NodeOptions,
};
use crate::identity::IdentityError;
use crate::interpreter::Dispatcher;

/// Session construction failures
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Options for creating a Shell session.
#[derive(Default)]
pub struct ShellOptions {
    pub config: ShellConfig,
    /// Overrides `config.login_uid`
    pub uid: Option<u32>,
    /// Binary table (defaults to every built-in)
    pub registry: Option<BinaryRegistry>,
    /// Node tree (defaults to the standard layout)
    pub fs: Option<Filesystem>,
}

pub struct Shell {
    fs: Filesystem,
    env: ExecutionEnvironment,
    dispatcher: Dispatcher,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Result<Self, ShellError> {
        let identities = options.config.identities()?;
        let uid = options.uid.unwrap_or(options.config.login_uid);

        let mut env = ExecutionEnvironment::create(uid, identities)?;
        env.set_var("HOSTNAME", &options.config.hostname);

        let registry = options.registry.unwrap_or_else(create_builtin_registry);
        let fs = match options.fs {
            Some(fs) => fs,
            None => Filesystem::new(default_layout(&env, &registry)?),
        };

        debug!(user = %env.user().name, binaries = registry.names().len(), "shell session ready");
        Ok(Self {
            fs,
            env,
            dispatcher: Dispatcher::new(registry),
        })
    }

    /// Run one command line. Dispatch failures become stderr text with a
    /// shell-style exit status. A line of nothing but spaces does nothing.
    pub fn exec(&mut self, line: &str) -> CommandResult {
        if line.trim().is_empty() {
            return CommandResult::success(String::new());
        }
        match self.dispatcher.dispatch(line, &mut self.env, &self.fs) {
            Ok(result) => result,
            Err(e) => CommandResult::with_exit_code(
                String::new(),
                format!("simshell: {}\n", e),
                e.exit_code(),
            ),
        }
    }

    pub fn prompt(&self) -> String {
        self.env.prompt()
    }

    pub fn env(&self) -> &ExecutionEnvironment {
        &self.env
    }

    pub fn fs(&self) -> &Filesystem {
        &self.fs
    }
}

/// `/bin` with one file per registered binary, a home per user, `/tmp`.
/// System directories belong to root when root exists.
fn default_layout(env: &ExecutionEnvironment, registry: &BinaryRegistry) -> Result<Node, FsError> {
    let system = env
        .identities()
        .lookup_user(0)
        .unwrap_or_else(|_| env.user())
        .clone();
    let as_system = || NodeOptions::owned_by(&system);

    let binaries = registry
        .names()
        .into_iter()
        .map(|name| {
            make_file(
                env,
                name,
                FileContent::Binary(name.to_string()),
                as_system().with_permissions(0o775u32),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let bin = make_directory(env, "bin", binaries, as_system())?;

    let homes = env
        .identities()
        .users()
        .map(|user| {
            make_directory(
                env,
                &user.name,
                vec![],
                NodeOptions::owned_by(user).with_permissions("755"),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let home = make_directory(env, "home", homes, as_system())?;

    let tmp = make_directory(env, "tmp", vec![], as_system().with_permissions("777"))?;

    make_root(env, vec![bin, home, tmp], as_system())
}
