//! Command Dispatcher
//!
//! Turns a command line into a binary invocation: tokenize, find the
//! executable file on PATH (or at an explicit path), look its id up in the
//! binary registry and run it.

use tracing::{debug, warn};

use super::command_resolution::{find_in_dir, is_path_command, split_path};
use super::errors::DispatchError;
use super::tokenizer::tokenize;
use crate::commands::{BinaryContext, BinaryRegistry, CommandResult};
use crate::environment::{ExecutionEnvironment, DEFAULT_PATH};
use crate::fs::{FileContent, Filesystem, Node, Path};

pub struct Dispatcher {
    registry: BinaryRegistry,
}

impl Dispatcher {
    pub fn new(registry: BinaryRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BinaryRegistry {
        &self.registry
    }

    /// Run one command line. The first token names the command and the
    /// rest are passed to the binary as they are, empty ones included.
    pub fn dispatch(
        &self,
        line: &str,
        env: &mut ExecutionEnvironment,
        fs: &Filesystem,
    ) -> Result<CommandResult, DispatchError> {
        let mut tokens = tokenize(line).into_iter();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<String> = tokens.collect();

        let (path, node) = self.locate(&name, env, fs)?;
        let id = match node.content() {
            Some(FileContent::Binary(id)) => id,
            _ => return Err(DispatchError::NotExecutable { path: path.to_string() }),
        };
        let binary = self.registry.get(id).ok_or_else(|| {
            warn!(path = %path, id = %id, "file names an unregistered binary");
            DispatchError::UnregisteredBinary { path: path.to_string(), id: id.clone() }
        })?;

        debug!(command = %name, path = %path, argc = args.len(), "invoking binary");
        Ok(binary.run(BinaryContext { args, env, fs }))
    }

    fn locate<'f>(
        &self,
        name: &str,
        env: &ExecutionEnvironment,
        fs: &'f Filesystem,
    ) -> Result<(Path, &'f Node), DispatchError> {
        if is_path_command(name) {
            let path = env.resolve_path(name);
            let node = fs.resolve(&path)?;
            if node.is_directory() {
                return Err(DispatchError::NotExecutable { path: path.to_string() });
            }
            return Ok((path, node));
        }

        let path_env = env.get_var("PATH").unwrap_or(DEFAULT_PATH);
        for dir in split_path(path_env) {
            let dir = Path::parse(dir);
            if let Some(node) = find_in_dir(fs, &dir, name) {
                return Ok((dir.append(name), node));
            }
        }

        debug!(command = %name, path = %path_env, "no match on PATH");
        Err(DispatchError::CommandNotFound { name: name.to_string() })
    }
}
