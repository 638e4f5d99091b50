//! simshell - A simulated filesystem and shell for terminal demos
//!
//! This library provides an in-memory node tree with owner and permission
//! metadata, path canonicalization and resolution, per-session execution
//! environments, and a small dispatcher that runs registered binaries found
//! on PATH.

pub mod commands;
pub mod config;
pub mod environment;
pub mod fs;
pub mod identity;
pub mod interpreter;
pub mod shell;

pub use commands::{Binary, BinaryContext, BinaryRegistry, CommandResult};
pub use config::{ConfigError, ShellConfig};
pub use environment::ExecutionEnvironment;
pub use fs::{Filesystem, FsError, Node, Path, PermissionSet};
pub use identity::{Group, IdentityError, IdentityRegistry, User};
pub use interpreter::{tokenize, DispatchError, Dispatcher};
pub use shell::{Shell, ShellError, ShellOptions};
